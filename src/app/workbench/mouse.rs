//! 鼠标路由：对话框 > 下拉菜单 > 菜单栏 > 编辑区

use super::layout::{self, WorkbenchLayout};
use super::Workbench;
use crate::core::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::menu::title_at;
use crate::kernel::viewport::screen_to_pos;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::models::Granularity;
use crate::tui::view::EventResult;
use std::time::Instant;

const DIALOG_SCROLL_ROWS: isize = 3;

impl Workbench {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let Some(layout) = self.last_layout else {
            return EventResult::Ignored;
        };

        let changed = match self.store.state().focus() {
            FocusTarget::FileDialog => self.handle_file_dialog_mouse(&layout, event),
            FocusTarget::ColorDialog => self.handle_color_dialog_mouse(&layout, event),
            FocusTarget::Menu => self.handle_menu_mouse(&layout, event),
            FocusTarget::Editor => {
                if self.handle_menu_bar_mouse(&layout, event) {
                    true
                } else {
                    self.handle_editor_mouse(&layout, event)
                }
            }
        };

        if changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn click_granularity(&mut self, event: &MouseEvent) -> Granularity {
        let config = &self.store.state().config;
        let (double_ms, triple_ms) = (config.double_click_ms, config.triple_click_ms);
        self.editor_mouse
            .click(event.column, event.row, Instant::now(), double_ms, triple_ms)
    }

    fn handle_file_dialog_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        let dialog = layout::file_dialog(layout.area);
        if !layout::contains(dialog.list, event.column, event.row) {
            return false;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let granularity = self.click_granularity(event);
                self.editor_mouse.stop_drag();

                let state = self.store.state();
                let index = state.file_dialog.scroll + (event.row - dialog.list.y) as usize;
                if index >= state.file_dialog.rows(&state.file_filters).len() {
                    return false;
                }
                let mut changed = self.dispatch_kernel(KernelAction::FileDialogSelect(index));
                if granularity != Granularity::Char {
                    changed |= self.dispatch_kernel(KernelAction::FileDialogAccept);
                }
                changed
            }
            MouseEventKind::ScrollUp => {
                self.dispatch_kernel(KernelAction::FileDialogMoveSelection(-DIALOG_SCROLL_ROWS))
            }
            MouseEventKind::ScrollDown => {
                self.dispatch_kernel(KernelAction::FileDialogMoveSelection(DIALOG_SCROLL_ROWS))
            }
            _ => false,
        }
    }

    fn handle_color_dialog_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let dialog = layout::color_dialog(layout.area);
        let Some(index) = layout::swatch_at(&dialog, event.column, event.row) else {
            return false;
        };

        let granularity = self.click_granularity(event);
        self.editor_mouse.stop_drag();
        let mut changed = self.dispatch_kernel(KernelAction::ColorDialogPick(index));
        if granularity != Granularity::Char {
            changed |= self.dispatch_kernel(KernelAction::ColorDialogAccept);
        }
        changed
    }

    fn handle_menu_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        let dropdown = layout::dropdown(layout, self.store.state());
        let row_at = |x: u16, y: u16| -> Option<usize> {
            let dropdown = dropdown?;
            layout::contains(dropdown.rows, x, y).then(|| (y - dropdown.rows.y) as usize)
        };
        let scroll = self.store.state().menu.scroll();

        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                match row_at(event.column, event.row) {
                    Some(row) => self.dispatch_kernel(KernelAction::MenuSelect(scroll + row)),
                    None => false,
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = row_at(event.column, event.row) {
                    let index = scroll + row;
                    self.dispatch_kernel(KernelAction::MenuSelect(index));
                    // Separators cannot be selected, so only activate a row that took.
                    if self.store.state().menu.selected() == index {
                        return self.dispatch_kernel(KernelAction::MenuActivate);
                    }
                    return false;
                }
                if layout::contains(layout.menu_bar, event.column, event.row) {
                    if let Some(menu) = title_at(event.column - layout.menu_bar.x) {
                        return self.dispatch_kernel(KernelAction::MenuOpen(menu));
                    }
                }
                self.dispatch_kernel(KernelAction::MenuClose)
            }
            MouseEventKind::ScrollUp if row_at(event.column, event.row).is_some() => {
                self.dispatch_kernel(KernelAction::MenuScroll(-1))
            }
            MouseEventKind::ScrollDown if row_at(event.column, event.row).is_some() => {
                self.dispatch_kernel(KernelAction::MenuScroll(1))
            }
            _ => false,
        }
    }

    fn handle_menu_bar_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left)
            || !layout::contains(layout.menu_bar, event.column, event.row)
        {
            return false;
        }
        match title_at(event.column - layout.menu_bar.x) {
            Some(menu) => self.dispatch_kernel(KernelAction::MenuOpen(menu)),
            None => false,
        }
    }

    fn handle_editor_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        let editor = layout.editor;
        if editor.width == 0 || editor.height == 0 {
            return false;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !layout::contains(editor, event.column, event.row) {
                    return false;
                }
                let Some(pos) = self.editor_pos(layout, event.column, event.row) else {
                    return false;
                };
                let extend = event.modifiers.contains(KeyModifiers::SHIFT);
                let granularity = if extend {
                    self.editor_mouse.stop_drag();
                    Granularity::Char
                } else {
                    self.click_granularity(event)
                };
                self.dispatch_kernel(KernelAction::EditorMouseDown {
                    pos,
                    granularity,
                    extend,
                })
            }
            MouseEventKind::Drag(MouseButton::Left) if self.editor_mouse.dragging() => {
                // Dragging past the edges keeps selecting along the border row/column.
                let x = event
                    .column
                    .clamp(editor.x, editor.x + editor.width.saturating_sub(1));
                let y = event
                    .row
                    .clamp(editor.y, editor.y + editor.height.saturating_sub(1));
                match self.editor_pos(layout, x, y) {
                    Some(pos) => self.dispatch_kernel(KernelAction::EditorMouseDrag { pos }),
                    None => false,
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.editor_mouse.stop_drag();
                false
            }
            MouseEventKind::ScrollUp if layout::contains(editor, event.column, event.row) => {
                self.dispatch_kernel(KernelAction::EditorScroll { delta: -1 })
            }
            MouseEventKind::ScrollDown if layout::contains(editor, event.column, event.row) => {
                self.dispatch_kernel(KernelAction::EditorScroll { delta: 1 })
            }
            _ => false,
        }
    }

    fn editor_pos(&self, layout: &WorkbenchLayout, x: u16, y: u16) -> Option<(usize, usize)> {
        let state = self.store.state();
        screen_to_pos(
            &state.viewport,
            state.document.buffer(),
            state.config.tab_size,
            x - layout.editor.x,
            y - layout.editor.y,
        )
    }
}
