use super::super::layout;
use super::super::Workbench;
use crate::core::text_window;
use crate::kernel::dialog::{LineInput, SWATCHES, SWATCH_COLUMNS};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

impl Workbench {
    /// 绘制带标签的单行输入框，返回光标所在单元格
    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        input: &LineInput,
    ) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let label_width = label.width().min(area.width as usize);
        let available = (area.width as usize).saturating_sub(label_width);
        let (start, end) = text_window::input_window(&input.value, input.cursor, available);
        let visible = &input.value[start..end];
        let caret_x = input.value[start..input.cursor.clamp(start, end)].width();

        let line = Line::from(vec![
            Span::styled(
                label.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(visible.to_string()),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let x = area.x as usize + label_width + caret_x;
        (x < (area.x + area.width) as usize).then_some((x as u16, area.y))
    }

    fn render_dialog_frame(&self, frame: &mut Frame, outer: Rect, title: &str) {
        frame.render_widget(Clear, outer);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.dialog_border))
                .title(format!(" {title} ")),
            outer,
        );
    }

    pub(super) fn render_file_dialog(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        let state = self.store.state();
        let dialog = &state.file_dialog;
        let geometry = layout::file_dialog(area);
        if geometry.outer.width < 10 || geometry.outer.height < 7 {
            return None;
        }

        self.render_dialog_frame(frame, geometry.outer, dialog.mode.title());

        let dir = dialog.dir.display().to_string();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text_window::fit_to_width(&dir, geometry.dir.width as usize),
                Style::default().fg(self.theme.menu_muted_fg),
            ))),
            geometry.dir,
        );

        let rows = dialog.rows(&state.file_filters);
        let width = geometry.list.width as usize;
        let selected = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg);
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(dialog.scroll)
            .take(geometry.list.height as usize)
            .map(|(index, row)| {
                let text = text_window::fit_to_width(&format!(" {}", row.label()), width);
                if index == dialog.selected {
                    Line::from(Span::styled(text, selected))
                } else {
                    Line::from(text)
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), geometry.list);

        let filter = state
            .file_filters
            .get(dialog.filter)
            .map(|f| f.display())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Type: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(filter),
                Span::styled("  (Tab)", Style::default().fg(self.theme.menu_muted_fg)),
            ])),
            geometry.filter,
        );

        if let Some(error) = &dialog.error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    text_window::fit_to_width(error, geometry.message.width as usize),
                    Style::default().fg(self.theme.error_fg),
                )),
                geometry.message,
            );
        }

        self.render_input(frame, geometry.name, "Name: ", &dialog.input)
    }

    pub(super) fn render_color_dialog(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        let dialog = &self.store.state().color_dialog;
        let geometry = layout::color_dialog(area);
        if geometry.swatches.width == 0 || geometry.swatches.height == 0 {
            return None;
        }

        self.render_dialog_frame(frame, geometry.outer, "Highlight Color");

        let cell = layout::SWATCH_WIDTH as usize;
        let lines: Vec<Line> = SWATCHES
            .chunks(SWATCH_COLUMNS)
            .enumerate()
            .map(|(row, colors)| {
                let spans: Vec<Span> = colors
                    .iter()
                    .enumerate()
                    .map(|(col, color)| {
                        let index = row * SWATCH_COLUMNS + col;
                        let text = if index == dialog.selected {
                            format!("[{}]", " ".repeat(cell.saturating_sub(2)))
                        } else {
                            " ".repeat(cell)
                        };
                        Span::styled(
                            text,
                            Style::default().bg(self.theme.highlight_color(*color)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), geometry.swatches);

        if let Some(error) = &dialog.error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    text_window::fit_to_width(error, geometry.message.width as usize),
                    Style::default().fg(self.theme.error_fg),
                )),
                geometry.message,
            );
        }

        self.render_input(frame, geometry.input, "Hex: ", &dialog.input)
    }
}
