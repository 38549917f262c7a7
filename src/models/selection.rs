//! 选区模型：字符 / 单词 / 整行三种粒度（对应单击、双击、三击拖拽）

use super::text_buffer::slice_to_cow;
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_xid::UnicodeXID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Char,
    Word,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    anchor: (usize, usize),
    cursor: (usize, usize),
    granularity: Granularity,
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum CharClass {
    Word,
    Space,
    Punct,
}

fn classify(grapheme: &str) -> CharClass {
    match grapheme.chars().next() {
        Some(c) if c.is_whitespace() => CharClass::Space,
        Some(c) if c == '_' || c.is_xid_continue() => CharClass::Word,
        _ => CharClass::Punct,
    }
}

fn visible_graphemes(rope: &Rope, row: usize) -> Vec<String> {
    if row >= rope.len_lines() {
        return Vec::new();
    }
    let line = slice_to_cow(rope.line(row));
    let line = line.trim_end_matches(['\n', '\r']);
    line.graphemes(true).map(str::to_string).collect()
}

impl Selection {
    pub fn new(pos: (usize, usize), granularity: Granularity) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
            granularity,
        }
    }

    /// 创建选区；按词/行粒度时初始即覆盖 `pos` 所在的词或行
    pub fn from_pos(pos: (usize, usize), granularity: Granularity, rope: &Rope) -> Self {
        let mut selection = Self::new(pos, granularity);
        match granularity {
            Granularity::Char => {}
            Granularity::Word => {
                let graphemes = visible_graphemes(rope, pos.0);
                let (start, end) = Self::word_bounds(&graphemes, pos.1);
                selection.anchor = (pos.0, start);
                selection.cursor = (pos.0, end);
            }
            Granularity::Line => {
                selection.anchor = (pos.0, 0);
                selection.cursor = (pos.0, visible_graphemes(rope, pos.0).len());
            }
        }
        selection
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn update_cursor(&mut self, pos: (usize, usize), rope: &Rope) {
        self.cursor = match self.granularity {
            Granularity::Char => pos,
            Granularity::Word => {
                let graphemes = visible_graphemes(rope, pos.0);
                let (start, end) = Self::word_bounds(&graphemes, pos.1);
                if pos < self.anchor {
                    (pos.0, start)
                } else {
                    (pos.0, end)
                }
            }
            Granularity::Line => {
                if pos < self.anchor {
                    (pos.0, 0)
                } else {
                    (pos.0, visible_graphemes(rope, pos.0).len())
                }
            }
        };
    }

    /// `col` 处同类字素连续段的范围 `[start, end)`
    pub fn word_bounds(graphemes: &[String], col: usize) -> (usize, usize) {
        if col >= graphemes.len() {
            return (graphemes.len(), graphemes.len());
        }
        let class = classify(&graphemes[col]);
        let mut start = col;
        while start > 0 && classify(&graphemes[start - 1]) == class {
            start -= 1;
        }
        let mut end = col + 1;
        while end < graphemes.len() && classify(&graphemes[end]) == class {
            end += 1;
        }
        (start, end)
    }

    pub fn range(&self) -> ((usize, usize), (usize, usize)) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    pub fn contains(&self, pos: (usize, usize)) -> bool {
        let (start, end) = self.range();
        start <= pos && pos < end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
