//! 编辑区视口：行偏移 / 水平偏移，光标跟随，屏幕坐标 → 文本位置

use crate::models::{slice_to_cow, TextBuffer};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub line_offset: usize,
    pub horiz_offset: u32,
    pub width: usize,
    pub height: usize,
}

impl ViewportState {
    pub fn reset(&mut self) {
        self.line_offset = 0;
        self.horiz_offset = 0;
    }

    /// 尺寸确有变化时返回 true
    pub fn set_size(&mut self, width: usize, height: usize) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn scroll_lines(&mut self, delta: isize, buffer: &TextBuffer) -> bool {
        let max_offset = buffer
            .len_lines()
            .max(1)
            .saturating_sub(self.height.max(1));
        let prev = self.line_offset;
        self.line_offset = if delta < 0 {
            self.line_offset.saturating_sub(delta.unsigned_abs())
        } else {
            (self.line_offset + delta as usize).min(max_offset)
        };
        prev != self.line_offset
    }
}

pub fn tab_advance(display_col: u32, tab_size: u8) -> u32 {
    let tab = tab_size.max(1) as u32;
    let rem = display_col % tab;
    if rem == 0 {
        tab
    } else {
        tab - rem
    }
}

/// 第 `row` 行第 `col` 个字素的显示列（展开制表符）
pub fn display_x(buffer: &TextBuffer, row: usize, col: usize, tab_size: u8) -> u32 {
    let Some(slice) = buffer.line_slice(row) else {
        return 0;
    };
    let line = slice_to_cow(slice);

    let mut display_col = 0u32;
    for (i, g) in line.graphemes(true).enumerate() {
        if i >= col || g == "\n" || g == "\r\n" {
            break;
        }
        if g == "\t" {
            display_col += tab_advance(display_col, tab_size);
        } else {
            display_col += g.width() as u32;
        }
    }
    display_col
}

pub fn cursor_display_x(buffer: &TextBuffer, tab_size: u8) -> u32 {
    let (row, col) = buffer.cursor();
    display_x(buffer, row, col, tab_size)
}

/// 修正偏移并滚动，保证光标可见
pub fn follow_cursor(viewport: &mut ViewportState, buffer: &TextBuffer, tab_size: u8) {
    // Not laid out yet; the first size update will follow.
    if viewport.width == 0 || viewport.height == 0 {
        return;
    }
    let total_lines = buffer.len_lines().max(1);
    let height = viewport.height.max(1);

    let max_offset = total_lines.saturating_sub(height);
    viewport.line_offset = viewport.line_offset.min(max_offset);

    let (row, _) = buffer.cursor();
    if row < viewport.line_offset {
        viewport.line_offset = row;
    } else if row >= viewport.line_offset + height {
        viewport.line_offset = row.saturating_sub(height.saturating_sub(1));
    }

    let cursor_x = cursor_display_x(buffer, tab_size);
    let width = viewport.width.max(1) as u32;
    if cursor_x < viewport.horiz_offset {
        viewport.horiz_offset = cursor_x;
    } else if cursor_x >= viewport.horiz_offset + width {
        viewport.horiz_offset = cursor_x.saturating_sub(width.saturating_sub(1));
    }
}

/// 文本区内的单元格 → 缓冲区 `(row, col)`；超出末行落在末行，超出行尾落在行尾
pub fn screen_to_pos(
    viewport: &ViewportState,
    buffer: &TextBuffer,
    tab_size: u8,
    x: u16,
    y: u16,
) -> Option<(usize, usize)> {
    if viewport.width == 0 || viewport.height == 0 {
        return None;
    }
    if x as usize >= viewport.width || y as usize >= viewport.height {
        return None;
    }

    let row = (viewport.line_offset + y as usize).min(buffer.len_lines().saturating_sub(1));
    let slice = buffer.line_slice(row)?;
    let line = slice_to_cow(slice);

    let target_x = viewport.horiz_offset + x as u32;
    let mut accumulated_x = 0u32;
    let mut col = 0usize;
    for (i, g) in line.graphemes(true).enumerate() {
        if g == "\n" || g == "\r\n" {
            break;
        }
        let w = if g == "\t" {
            tab_advance(accumulated_x, tab_size)
        } else {
            g.width() as u32
        };
        if accumulated_x + w / 2 >= target_x {
            return Some((row, i));
        }
        accumulated_x += w;
        col = i + 1;
    }

    Some((row, col))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/viewport.rs"]
mod tests;
