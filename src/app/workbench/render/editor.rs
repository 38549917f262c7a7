//! 编辑区绘制：按标签区间合并样式，选区反色，Tab 展开，水平裁剪

use super::super::Workbench;
use crate::app::theme::UiTheme;
use crate::kernel::viewport::{cursor_display_x, tab_advance};
use crate::models::{slice_to_cow, FontSlant, FontWeight, ResolvedStyle, TagSet};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// 把样式相同的连续单元格合并成 Span
struct LineBuilder {
    spans: Vec<Span<'static>>,
    text: String,
    style: Style,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            spans: Vec::new(),
            text: String::new(),
            style: Style::default(),
        }
    }

    fn push(&mut self, text: &str, style: Style) {
        if style != self.style && !self.text.is_empty() {
            self.flush();
        }
        self.style = style;
        self.text.push_str(text);
    }

    fn push_blank(&mut self, cells: u32, style: Style) {
        if cells > 0 {
            self.push(&" ".repeat(cells as usize), style);
        }
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.spans.push(Span::styled(text, self.style));
        }
    }

    fn finish(mut self) -> Line<'static> {
        self.flush();
        Line::from(self.spans)
    }
}

fn text_style(theme: &UiTheme, resolved: &ResolvedStyle<'_>, selected: bool) -> Style {
    let mut style = Style::default();
    if resolved.weight == FontWeight::Bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if resolved.slant == FontSlant::Italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if let Some(bg) = resolved.background {
        style = style.bg(theme.highlight_color(bg));
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

impl Workbench {
    /// 绘制可见行；光标在屏幕内时返回其终端坐标
    pub(super) fn render_editor(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let state = self.store.state();
        let doc = &state.document;
        let buffer = doc.buffer();
        let viewport = &state.viewport;
        let tab_size = state.config.tab_size;
        let selection = buffer.selection_char_range();

        let left = viewport.horiz_offset;
        let right = left + area.width as u32;

        let mut lines = Vec::with_capacity(area.height as usize);
        for y in 0..area.height as usize {
            let row = viewport.line_offset + y;
            let Some(slice) = buffer.line_slice(row) else {
                break;
            };
            let line = slice_to_cow(slice);
            let line_start = buffer.rope().line_to_char(row);
            let line_chars = line.trim_end_matches(['\n', '\r']).chars().count();

            let runs = doc.tags().runs(line_start..line_start + line_chars);
            let mut run_idx = 0usize;
            let tags_at = |offset: usize, run_idx: &mut usize| -> TagSet {
                while *run_idx < runs.len() && runs[*run_idx].0.end <= offset {
                    *run_idx += 1;
                }
                runs.get(*run_idx)
                    .filter(|(range, _)| range.contains(&offset))
                    .map(|(_, set)| *set)
                    .unwrap_or(TagSet::EMPTY)
            };

            let mut builder = LineBuilder::new();
            let mut char_offset = line_start;
            let mut display_x = 0u32;
            for g in line.graphemes(true) {
                if g == "\n" || g == "\r\n" || g == "\r" {
                    break;
                }
                let tags = tags_at(char_offset, &mut run_idx);
                let selected = is_selected(&selection, char_offset);
                let style = text_style(&self.theme, &doc.tags().resolve(tags, doc.font()), selected);
                char_offset += g.chars().count();

                let is_tab = g == "\t";
                let w = if is_tab {
                    tab_advance(display_x, tab_size)
                } else {
                    g.width() as u32
                };
                let start = display_x;
                let end = display_x + w;
                display_x = end;

                if end <= left {
                    continue;
                }
                if start >= right {
                    break;
                }
                if is_tab || start < left || end > right {
                    // Partially visible cells are padded so columns stay aligned.
                    let visible = end.min(right) - start.max(left);
                    builder.push_blank(visible, style);
                    if end > right {
                        break;
                    }
                } else {
                    builder.push(g, style);
                }
            }
            lines.push(builder.finish());
        }

        frame.render_widget(Paragraph::new(lines), area);

        let (cursor_row, _) = buffer.cursor();
        let cursor_x = cursor_display_x(buffer, tab_size);
        if cursor_row < viewport.line_offset || cursor_x < left || cursor_x >= right {
            return None;
        }
        let y = cursor_row - viewport.line_offset;
        if y >= area.height as usize {
            return None;
        }
        Some((area.x + (cursor_x - left) as u16, area.y + y as u16))
    }
}

fn is_selected(selection: &Option<Range<usize>>, offset: usize) -> bool {
    selection
        .as_ref()
        .is_some_and(|range| range.contains(&offset))
}
