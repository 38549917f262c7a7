//! 样式标签表
//!
//! 职责：
//! - 命名标签（bold / italic / highlight）→ 有序、合并后的字符区间
//! - 每个标签一份样式记录 `{weight, slant, background}`
//! - 文本编辑时区间随之平移（插入在区间内部会扩展区间）
//!
//! 样式记录只描述意图，渲染时再与文档的基础字体组合。

use super::color::HexColor;
use super::edit_op::EditOp;
use rustc_hash::FxHashMap;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagName {
    Bold,
    Italic,
    Highlight,
}

impl TagName {
    pub const ALL: [TagName; 3] = [TagName::Bold, TagName::Italic, TagName::Highlight];

    pub fn as_str(self) -> &'static str {
        match self {
            TagName::Bold => "bold",
            TagName::Italic => "italic",
            TagName::Highlight => "highlight",
        }
    }

    fn bit(self) -> u8 {
        match self {
            TagName::Bold => 1 << 0,
            TagName::Italic => 1 << 1,
            TagName::Highlight => 1 << 2,
        }
    }
}

/// 单个字符上的标签集合
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u8);

impl TagSet {
    pub const EMPTY: Self = Self(0);

    pub fn contains(self, tag: TagName) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn insert(&mut self, tag: TagName) {
        self.0 |= tag.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TagName> {
        TagName::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    Roman,
    Italic,
}

/// 文档级字体，作用于整个缓冲区，不按区间设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFont {
    pub family: String,
    pub size: u16,
}

impl BaseFont {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagStyle {
    pub weight: Option<FontWeight>,
    pub slant: Option<FontSlant>,
    pub background: Option<HexColor>,
}

impl TagStyle {
    pub fn bold() -> Self {
        Self {
            weight: Some(FontWeight::Bold),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            slant: Some(FontSlant::Italic),
            ..Self::default()
        }
    }

    pub fn background(color: HexColor) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    /// `other` 中设置的项覆盖当前值，未设置的保留
    pub fn merge(&mut self, other: TagStyle) {
        if other.weight.is_some() {
            self.weight = other.weight;
        }
        if other.slant.is_some() {
            self.slant = other.slant;
        }
        if other.background.is_some() {
            self.background = other.background;
        }
    }
}

/// 一段文本的最终渲染属性：基础字体叠加标签样式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle<'a> {
    pub family: &'a str,
    pub size: u16,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub background: Option<HexColor>,
}

#[derive(Debug, Clone, Default)]
pub struct TagTable {
    ranges: FxHashMap<TagName, Vec<Range<usize>>>,
    styles: FxHashMap<TagName, TagStyle>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: TagName, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let ranges = self.ranges.entry(tag).or_default();
        ranges.push(range);
        normalize(ranges);
    }

    pub fn remove(&mut self, tag: TagName, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let Some(ranges) = self.ranges.get_mut(&tag) else {
            return;
        };

        let mut out = Vec::with_capacity(ranges.len() + 1);
        for r in ranges.drain(..) {
            if r.end <= range.start || r.start >= range.end {
                out.push(r);
                continue;
            }
            if r.start < range.start {
                out.push(r.start..range.start);
            }
            if r.end > range.end {
                out.push(range.end..r.end);
            }
        }
        *ranges = out;
    }

    pub fn has_tag_at(&self, tag: TagName, offset: usize) -> bool {
        self.ranges
            .get(&tag)
            .is_some_and(|ranges| ranges.iter().any(|r| r.contains(&offset)))
    }

    pub fn tags_at(&self, offset: usize) -> TagSet {
        let mut set = TagSet::EMPTY;
        for tag in TagName::ALL {
            if self.has_tag_at(tag, offset) {
                set.insert(tag);
            }
        }
        set
    }

    pub fn ranges(&self, tag: TagName) -> &[Range<usize>] {
        self.ranges.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn configure(&mut self, tag: TagName, style: TagStyle) {
        self.styles.entry(tag).or_default().merge(style);
    }

    pub fn style(&self, tag: TagName) -> TagStyle {
        self.styles.get(&tag).copied().unwrap_or_default()
    }

    /// 清空所有区间，保留标签样式配置
    pub fn clear_ranges(&mut self) {
        self.ranges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.values().all(Vec::is_empty)
    }

    /// 缓冲区编辑后平移区间
    pub fn apply_edit(&mut self, op: &EditOp) {
        match op {
            EditOp::Insert { char_offset, .. } => {
                let pos = *char_offset;
                let len = op.inserted_len();
                if len == 0 {
                    return;
                }
                for ranges in self.ranges.values_mut() {
                    for r in ranges.iter_mut() {
                        if pos <= r.start {
                            r.start += len;
                            r.end += len;
                        } else if pos < r.end {
                            r.end += len;
                        }
                    }
                }
            }
            EditOp::Delete { start, end } => {
                let (start, end) = (*start, *end);
                if start >= end {
                    return;
                }
                let removed = end - start;
                let map = |x: usize| {
                    if x <= start {
                        x
                    } else if x >= end {
                        x - removed
                    } else {
                        start
                    }
                };
                for ranges in self.ranges.values_mut() {
                    for r in ranges.iter_mut() {
                        *r = map(r.start)..map(r.end);
                    }
                    normalize(ranges);
                }
            }
        }
    }

    /// 把 `span` 切成标签集合相同的最大连续段
    pub fn runs(&self, span: Range<usize>) -> Vec<(Range<usize>, TagSet)> {
        if span.start >= span.end {
            return Vec::new();
        }

        let mut cuts = vec![span.start, span.end];
        for ranges in self.ranges.values() {
            for r in ranges {
                for edge in [r.start, r.end] {
                    if edge > span.start && edge < span.end {
                        cuts.push(edge);
                    }
                }
            }
        }
        cuts.sort_unstable();
        cuts.dedup();

        let mut runs: Vec<(Range<usize>, TagSet)> = Vec::with_capacity(cuts.len());
        for pair in cuts.windows(2) {
            let set = self.tags_at(pair[0]);
            match runs.last_mut() {
                Some((prev, prev_set)) if *prev_set == set && prev.end == pair[0] => {
                    prev.end = pair[1];
                }
                _ => runs.push((pair[0]..pair[1], set)),
            }
        }
        runs
    }

    /// 在 `base` 上叠加 `tags` 的样式
    pub fn resolve<'a>(&self, tags: TagSet, base: &'a BaseFont) -> ResolvedStyle<'a> {
        let mut resolved = ResolvedStyle {
            family: &base.family,
            size: base.size,
            weight: FontWeight::Normal,
            slant: FontSlant::Roman,
            background: None,
        };
        for tag in tags.iter() {
            let style = self.style(tag);
            if let Some(weight) = style.weight {
                resolved.weight = weight;
            }
            if let Some(slant) = style.slant {
                resolved.slant = slant;
            }
            if let Some(bg) = style.background {
                resolved.background = Some(bg);
            }
        }
        resolved
    }
}

fn normalize(ranges: &mut Vec<Range<usize>>) {
    ranges.retain(|r| r.start < r.end);
    ranges.sort_unstable_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges.drain(..) {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    *ranges = merged;
}

#[cfg(test)]
#[path = "../../tests/unit/models/style_tags.rs"]
mod tests;
