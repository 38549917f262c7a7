use super::super::layout::{self, WorkbenchLayout};
use super::super::Workbench;
use crate::core::text_window;
use crate::kernel::menu::{title_spans, MENU_TITLES};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

impl Workbench {
    pub(super) fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = self.store.state().title();
        let text = text_window::fit_to_width(&title, area.width as usize);
        let line = Line::from(Span::styled(
            text,
            Style::default()
                .fg(self.theme.title_fg)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }

    pub(super) fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let base = Style::default()
            .bg(self.theme.menu_bar_bg)
            .fg(self.theme.menu_bar_fg);
        let active = Style::default()
            .bg(self.theme.menu_active_bg)
            .fg(self.theme.menu_active_fg);
        let open = self.store.state().menu.open_menu();

        let mut spans = Vec::with_capacity(MENU_TITLES.len() * 2 + 1);
        let mut x = 0u16;
        for (index, (title, span)) in MENU_TITLES.iter().zip(title_spans()).enumerate() {
            if span.start > x {
                spans.push(Span::styled(" ".repeat((span.start - x) as usize), base));
            }
            let style = if open == Some(index) { active } else { base };
            spans.push(Span::styled(format!(" {title} "), style));
            x = span.end;
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }

    pub(super) fn render_dropdown(&self, frame: &mut Frame, layout: &WorkbenchLayout) {
        let state = self.store.state();
        let Some(menu) = state.menu.open_menu() else {
            return;
        };
        let Some(dropdown) = layout::dropdown(layout, state) else {
            return;
        };
        if dropdown.rows.width == 0 || dropdown.rows.height == 0 {
            return;
        }

        let items = state.menu.items(menu, &state.document.font().family);
        let base = Style::default().bg(self.theme.menu_bg).fg(self.theme.menu_fg);
        let selected = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg);
        let muted = Style::default().bg(self.theme.menu_bg).fg(self.theme.menu_muted_fg);

        frame.render_widget(Clear, dropdown.outer);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.menu_border))
                .style(base),
            dropdown.outer,
        );

        let width = dropdown.rows.width as usize;
        let mut lines = Vec::with_capacity(dropdown.rows.height as usize);
        for index in state.menu.visible_range(items.len()) {
            let item = &items[index];
            if item.is_separator() {
                lines.push(Line::from(Span::styled("─".repeat(width), muted)));
                continue;
            }

            let marker = match item.checked {
                Some(true) => "● ",
                Some(false) => "  ",
                None => "",
            };
            let left = format!(" {marker}{}", item.label);
            let right = item
                .shortcut
                .as_ref()
                .map(|s| format!("{s} "))
                .unwrap_or_default();
            let gap = width.saturating_sub(left.width() + right.width()).max(1);
            let text = text_window::fit_to_width(&format!("{left}{}{right}", " ".repeat(gap)), width);

            let style = if index == state.menu.selected() {
                selected
            } else {
                base
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines), dropdown.rows);
    }
}
