//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标和选区管理
//! - 行列 ↔ 字符偏移映射

use super::edit_op::EditOp;
use super::selection::{Granularity, Selection};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    preferred_col: Option<usize>,
    selection: Option<Selection>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            preferred_col: None,
            selection: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            preferred_col: None,
            selection: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.cursor = (0, 0);
        self.preferred_col = None;
        self.selection = None;
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// 移动光标（限制在末行与行长内）
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = self.clamp_pos((row, col));
        self.preferred_col = None;
    }

    pub fn clamp_pos(&self, pos: (usize, usize)) -> (usize, usize) {
        let row = pos.0.min(self.len_lines().saturating_sub(1));
        let col = pos.1.min(self.line_grapheme_len(row));
        (row, col)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn update_selection_cursor(&mut self, pos: (usize, usize)) {
        let pos = self.clamp_pos(pos);
        if let Some(sel) = &mut self.selection {
            sel.update_cursor(pos, &self.rope);
            self.cursor = sel.cursor();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selection
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// 非空选区的字符区间 `[first, last)`
    pub fn selection_char_range(&self) -> Option<Range<usize>> {
        let selection = self.selection.as_ref().filter(|s| !s.is_empty())?;
        let (start, end) = selection.range();
        Some(self.pos_to_char(start)..self.pos_to_char(end))
    }

    pub fn select_all(&mut self) {
        let last_row = self.len_lines().saturating_sub(1);
        let end = (last_row, self.line_grapheme_len(last_row));
        let mut selection = Selection::new((0, 0), Granularity::Char);
        selection.update_cursor(end, &self.rope);
        self.selection = Some(selection);
        self.cursor = end;
        self.preferred_col = None;
    }

    /// 以 `pos` 为锚点开始选区
    pub fn begin_selection(&mut self, pos: (usize, usize), granularity: Granularity) {
        let pos = self.clamp_pos(pos);
        let selection = Selection::from_pos(pos, granularity, &self.rope);
        self.cursor = selection.cursor();
        self.selection = Some(selection);
        self.preferred_col = None;
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        let (row, col) = self.clamp_pos(pos);
        self.rope.line_to_char(row) + self.grapheme_to_char_index(row, col)
    }

    pub fn char_to_pos(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        let within = char_idx - self.rope.line_to_char(row);
        let line = slice_to_cow(self.rope.line(row));

        let mut consumed = 0usize;
        let mut col = 0usize;
        for grapheme in line.graphemes(true) {
            if consumed >= within {
                break;
            }
            consumed += grapheme.chars().count();
            col += 1;
        }
        (row, col.min(self.line_grapheme_len(row)))
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        let without_newline = without_newline
            .strip_suffix('\r')
            .unwrap_or(without_newline);
        without_newline.graphemes(true).count()
    }

    // ==================== 原子操作方法（返回 EditOp）====================

    /// 插入字符串，返回 EditOp
    pub fn insert_str_op(&mut self, s: &str) -> EditOp {
        let char_offset = self.pos_to_char(self.cursor);

        self.rope.insert(char_offset, s);

        self.cursor = self.char_to_pos(char_offset + s.chars().count());
        self.preferred_col = None;

        EditOp::Insert {
            char_offset,
            text: s.to_string(),
        }
    }

    /// 向后删除（Backspace），返回 EditOp
    pub fn delete_backward_op(&mut self) -> Option<EditOp> {
        let (row, col) = self.cursor;
        if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            self.delete_range_op(start..end)
        } else if row > 0 {
            let end = self.rope.line_to_char(row);
            let start = self.line_break_start(end);
            self.delete_range_op(start..end)
        } else {
            None
        }
    }

    /// 向前删除（Delete），返回 EditOp
    pub fn delete_forward_op(&mut self) -> Option<EditOp> {
        let (row, col) = self.cursor;
        let line_len = self.line_grapheme_len(row);

        if col < line_len {
            let start = self.pos_to_char((row, col));
            let end = self.pos_to_char((row, col + 1));
            self.delete_range_op(start..end)
        } else if row + 1 < self.len_lines() {
            let start = self.pos_to_char((row, col));
            let end = self.rope.line_to_char(row + 1);
            self.delete_range_op(start..end)
        } else {
            None
        }
    }

    /// 删除字符区间，光标落在区间起点
    pub fn delete_range_op(&mut self, range: Range<usize>) -> Option<EditOp> {
        let end = range.end.min(self.rope.len_chars());
        let start = range.start.min(end);
        if start == end {
            return None;
        }

        self.rope.remove(start..end);

        self.cursor = self.char_to_pos(start);
        self.selection = None;
        self.preferred_col = None;

        Some(EditOp::Delete { start, end })
    }

    /// 删除选区，返回 EditOp
    pub fn delete_selection_op(&mut self) -> Option<EditOp> {
        let range = self.selection_char_range()?;
        self.delete_range_op(range)
    }

    fn line_break_start(&self, line_start: usize) -> usize {
        let mut start = line_start.saturating_sub(1);
        if start > 0 && self.rope.char(start) == '\n' && self.rope.char(start - 1) == '\r' {
            start -= 1;
        }
        start
    }

    // ==================== 光标移动 ====================

    pub fn move_left(&mut self, extend: bool) {
        if !extend {
            if let Some(range) = self.collapse_selection() {
                self.cursor = range.0;
                return;
            }
        }
        let (row, col) = self.cursor;
        let target = if col > 0 {
            (row, col - 1)
        } else if row > 0 {
            (row - 1, self.line_grapheme_len(row - 1))
        } else {
            (row, col)
        };
        self.move_to(target, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend {
            if let Some(range) = self.collapse_selection() {
                self.cursor = range.1;
                return;
            }
        }
        let (row, col) = self.cursor;
        let target = if col < self.line_grapheme_len(row) {
            (row, col + 1)
        } else if row + 1 < self.len_lines() {
            (row + 1, 0)
        } else {
            (row, col)
        };
        self.move_to(target, extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.move_vertical(-1, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.move_vertical(1, extend);
    }

    pub fn move_vertical(&mut self, delta: isize, extend: bool) {
        let (row, col) = self.cursor;
        let preferred = self.preferred_col.unwrap_or(col);
        let last_row = self.len_lines().saturating_sub(1) as isize;
        let target_row = (row as isize + delta).clamp(0, last_row) as usize;
        let target = (target_row, preferred.min(self.line_grapheme_len(target_row)));
        self.move_to(target, extend);
        self.preferred_col = Some(preferred);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        let row = self.cursor.0;
        self.move_to((row, 0), extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        let row = self.cursor.0;
        let len = self.line_grapheme_len(row);
        self.move_to((row, len), extend);
    }

    pub fn move_file_start(&mut self, extend: bool) {
        self.move_to((0, 0), extend);
    }

    pub fn move_file_end(&mut self, extend: bool) {
        let last_row = self.len_lines().saturating_sub(1);
        let len = self.line_grapheme_len(last_row);
        self.move_to((last_row, len), extend);
    }

    fn move_to(&mut self, target: (usize, usize), extend: bool) {
        let target = self.clamp_pos(target);
        if extend {
            if self.selection.is_none() {
                self.selection = Some(Selection::new(self.cursor, Granularity::Char));
            }
            if let Some(sel) = &mut self.selection {
                sel.update_cursor(target, &self.rope);
            }
        } else {
            self.selection = None;
        }
        self.cursor = target;
        self.preferred_col = None;
    }

    fn collapse_selection(&mut self) -> Option<((usize, usize), (usize, usize))> {
        let selection = self.selection.take()?;
        if selection.is_empty() {
            return None;
        }
        self.preferred_col = None;
        Some(selection.range())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
