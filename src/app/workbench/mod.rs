//! 工作台：持有 Store，把终端输入翻译成 Action，并执行 Effect

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::FileProvider;
use crate::kernel::{Action as KernelAction, AppState, Store};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;

mod bridge;
mod input;
mod layout;
mod mouse;
mod mouse_tracker;
mod render;

use layout::WorkbenchLayout;
use mouse_tracker::EditorMouseTracker;

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    files: Box<dyn FileProvider>,
    theme: UiTheme,
    editor_mouse: EditorMouseTracker,
    pending_title: Option<String>,
    last_layout: Option<WorkbenchLayout>,
    last_cursor: Option<(u16, u16)>,
}

impl Workbench {
    pub fn new(
        state: AppState,
        keybindings: KeybindingService,
        files: Box<dyn FileProvider>,
    ) -> Self {
        let mut theme = UiTheme::default();
        theme.adapt_to_terminal_capabilities();
        Self::with_theme(state, keybindings, files, theme)
    }

    pub fn with_theme(
        mut state: AppState,
        keybindings: KeybindingService,
        files: Box<dyn FileProvider>,
        theme: UiTheme,
    ) -> Self {
        state.menu.set_shortcuts(keybindings.shortcut_labels());
        let pending_title = Some(state.title());
        Self {
            store: Store::new(state),
            keybindings,
            files,
            theme,
            editor_mouse: EditorMouseTracker::new(),
            pending_title,
            last_layout: None,
            last_cursor: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    /// 取出待设置的窗口标题（每次变化只返回一次）
    pub fn take_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    /// 与 File > Open 相同的流程加载 `path`
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        self.dispatch_kernel(KernelAction::OpenPath(path))
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.last_cursor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
