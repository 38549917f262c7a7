//! Fixed-width text helpers for menus, dialogs and the status line.
//!
//! Byte offsets returned here always land on UTF-8 character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

/// Truncates or right-pads `s` with spaces so it occupies exactly `width` cells
/// (a wide char that would straddle the edge is replaced by padding).
pub fn fit_to_width(s: &str, width: usize) -> String {
    let end = truncate_to_width(s, width);
    let mut out = s[..end].to_string();
    let used = out.width();
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

/// Byte window `[start, end)` of a single-line input so that the caret at byte
/// offset `cursor` stays visible inside `available_width` cells.
pub fn input_window(text: &str, cursor: usize, available_width: usize) -> (usize, usize) {
    let mut cursor = cursor.min(text.len());
    while cursor > 0 && !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    if available_width == 0 {
        return (cursor, cursor);
    }

    // One cell is reserved for the caret itself when it sits at the end.
    let budget = available_width.saturating_sub(1).max(1);
    let mut start = cursor;
    let mut used = 0usize;
    for (idx, ch) in text[..cursor].char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    if text[..cursor].width() <= budget {
        start = 0;
    }

    let end = start + truncate_to_width(&text[start..], available_width);
    (start, end.max(cursor))
}
