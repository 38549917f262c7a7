use super::super::Workbench;
use crate::core::text_window;
use crate::kernel::StatusLevel;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const IDLE_HINT: &str = "F10 Menu | Ctrl+S Save | Ctrl+Q Exit";

impl Workbench {
    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);

        let (message, message_style) = match &state.status {
            Some(status) => {
                let fg = match status.level {
                    StatusLevel::Info => self.theme.status_fg,
                    StatusLevel::Warning => self.theme.warning_fg,
                    StatusLevel::Error => self.theme.error_fg,
                };
                (status.text.as_str(), base.fg(fg))
            }
            None => (IDLE_HINT, base),
        };

        // Terminals draw every cell in one font, so the document font is reported here.
        let font = state.document.font();
        let (row, col) = state.document.buffer().cursor();
        let info = format!(
            "Font: {} {} | Ln {}, Col {} ",
            font.family,
            font.size,
            row + 1,
            col + 1
        );

        let width = area.width as usize;
        let info_width = info.width().min(width);
        let message_width = width - info_width;
        let left = text_window::fit_to_width(&format!(" {message}"), message_width);
        let right = text_window::fit_to_width(&info, info_width);

        let line = Line::from(vec![
            Span::styled(left, message_style),
            Span::styled(right, base),
        ]);
        frame.render_widget(Paragraph::new(line).style(base), area);
    }
}
