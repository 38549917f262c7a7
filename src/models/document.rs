//! 文档模型：单个编辑区的全部状态
//!
//! 职责：
//! - 文本缓冲区 + 样式标签表（编辑时保持同步）
//! - 当前文件路径（None 表示未命名）与窗口标题
//! - 整个缓冲区共用的基础字体

use super::color::HexColor;
use super::edit_op::EditOp;
use super::selection::Granularity;
use super::style_tags::{BaseFont, TagName, TagStyle, TagTable};
use super::text_buffer::TextBuffer;
use std::fmt;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "TextEditor";
pub const UNTITLED: &str = "Untitled";
/// 字体菜单总是以固定字号应用字体
pub const FONT_SIZE: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleError {
    NoSelection,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::NoSelection => write!(f, "No text selected"),
        }
    }
}

impl std::error::Error for StyleError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// `"<path> - TextEditor"` or `"Untitled - TextEditor"`.
pub fn window_title(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{} - {}", path.display(), APP_NAME),
        None => format!("{} - {}", UNTITLED, APP_NAME),
    }
}

pub struct Document {
    buffer: TextBuffer,
    tags: TagTable,
    path: Option<PathBuf>,
    font: BaseFont,
}

impl Document {
    pub fn new(font: BaseFont) -> Self {
        Self {
            buffer: TextBuffer::new(),
            tags: TagTable::new(),
            path: None,
            font,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn tags(&self) -> &TagTable {
        &self.tags
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn font(&self) -> &BaseFont {
        &self.font
    }

    pub fn title(&self) -> String {
        window_title(self.path())
    }

    // ==================== 文件菜单 ====================

    /// 清空缓冲区与路径
    pub fn new_document(&mut self) {
        self.buffer.clear();
        self.tags.clear_ranges();
        self.path = None;
    }

    /// 用从 `path` 读到的内容整体替换缓冲区
    pub fn load(&mut self, path: PathBuf, content: &str) {
        self.buffer = TextBuffer::from_text(content);
        self.tags.clear_ranges();
        self.path = Some(path);
    }

    /// 写盘用的完整文本；样式不保存
    pub fn contents(&self) -> String {
        self.buffer.text()
    }

    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    // ==================== 字体 / 样式 ====================

    /// 整个缓冲区改用 `(family, 12)`；标签样式继续叠加在新字体之上
    pub fn change_font(&mut self, family: &str) {
        self.font = BaseFont::new(family, FONT_SIZE);
    }

    pub fn toggle_bold(&mut self) -> Result<ToggleOutcome, StyleError> {
        self.toggle_tag(TagName::Bold, TagStyle::bold())
    }

    pub fn toggle_italic(&mut self) -> Result<ToggleOutcome, StyleError> {
        self.toggle_tag(TagName::Italic, TagStyle::italic())
    }

    /// 由选区第一个字符决定添加还是移除，结果作用于整个选区
    pub fn toggle_tag(
        &mut self,
        tag: TagName,
        style: TagStyle,
    ) -> Result<ToggleOutcome, StyleError> {
        let range = self
            .buffer
            .selection_char_range()
            .ok_or(StyleError::NoSelection)?;

        if self.tags.has_tag_at(tag, range.start) {
            self.tags.remove(tag, range);
            Ok(ToggleOutcome::Removed)
        } else {
            self.tags.add(tag, range);
            self.tags.configure(tag, style);
            Ok(ToggleOutcome::Added)
        }
    }

    /// 给选区打上 `highlight`；该标签只有一种背景色，所有高亮区间都变为 `color`
    pub fn highlight(&mut self, color: HexColor) -> Result<(), StyleError> {
        let range = self
            .buffer
            .selection_char_range()
            .ok_or(StyleError::NoSelection)?;
        self.tags.add(TagName::Highlight, range);
        self.tags.configure(TagName::Highlight, TagStyle::background(color));
        Ok(())
    }

    pub fn has_selection(&self) -> bool {
        self.buffer.has_selection()
    }

    // ==================== 编辑 ====================

    /// 在光标处插入，有选区时替换选区
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(op) = self.buffer.delete_selection_op() {
            self.apply(&op);
        }
        let op = self.buffer.insert_str_op(s);
        self.apply(&op);
    }

    pub fn insert_char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut tmp));
    }

    pub fn delete_backward(&mut self) -> bool {
        let op = match self.buffer.delete_selection_op() {
            Some(op) => Some(op),
            None => self.buffer.delete_backward_op(),
        };
        self.apply_opt(op)
    }

    pub fn delete_forward(&mut self) -> bool {
        let op = match self.buffer.delete_selection_op() {
            Some(op) => Some(op),
            None => self.buffer.delete_forward_op(),
        };
        self.apply_opt(op)
    }

    fn apply_opt(&mut self, op: Option<EditOp>) -> bool {
        match op {
            Some(op) => {
                self.apply(&op);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, op: &EditOp) {
        self.tags.apply_edit(op);
    }

    // ==================== 光标 / 选区 ====================

    pub fn move_left(&mut self, extend: bool) {
        self.buffer.move_left(extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        self.buffer.move_right(extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        self.buffer.move_up(extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.buffer.move_down(extend);
    }

    pub fn move_vertical(&mut self, delta: isize, extend: bool) {
        self.buffer.move_vertical(delta, extend);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        self.buffer.move_line_start(extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        self.buffer.move_line_end(extend);
    }

    pub fn move_file_start(&mut self, extend: bool) {
        self.buffer.move_file_start(extend);
    }

    pub fn move_file_end(&mut self, extend: bool) {
        self.buffer.move_file_end(extend);
    }

    pub fn set_cursor(&mut self, pos: (usize, usize)) {
        self.buffer.clear_selection();
        self.buffer.set_cursor(pos.0, pos.1);
    }

    pub fn begin_selection(&mut self, pos: (usize, usize), granularity: Granularity) {
        self.buffer.begin_selection(pos, granularity);
    }

    pub fn extend_selection(&mut self, pos: (usize, usize)) {
        self.buffer.update_selection_cursor(pos);
    }

    pub fn select_all(&mut self) {
        self.buffer.select_all();
    }

    pub fn clear_selection(&mut self) -> bool {
        let had = self.buffer.selection().is_some();
        self.buffer.clear_selection();
        had
    }

    /// Selects the char range `[start, end)`.
    pub fn select_chars(&mut self, start: usize, end: usize) {
        let anchor = self.buffer.char_to_pos(start);
        let cursor = self.buffer.char_to_pos(end);
        self.buffer.begin_selection(anchor, Granularity::Char);
        self.buffer.update_selection_cursor(cursor);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/document.rs"]
mod tests;
