use super::Workbench;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let result = match event {
        InputEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return EventResult::Ignored;
            }
            handle_key(workbench, key)
        }
        InputEvent::Mouse(mouse) => workbench.handle_mouse(mouse),
        InputEvent::Paste(text) => {
            consumed_if(workbench.dispatch_kernel(KernelAction::Paste(text.clone())))
        }
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    };

    if workbench.should_quit() {
        EventResult::Quit
    } else {
        result
    }
}

fn consumed_if(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn is_text_input(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

fn handle_key(workbench: &mut Workbench, key: &KeyEvent) -> EventResult {
    match workbench.store.state().focus() {
        FocusTarget::FileDialog => handle_file_dialog_key(workbench, key),
        FocusTarget::ColorDialog => handle_color_dialog_key(workbench, key),
        FocusTarget::Menu => handle_menu_key(workbench, key),
        FocusTarget::Editor => handle_editor_key(workbench, key),
    }
}

fn handle_file_dialog_key(workbench: &mut Workbench, key: &KeyEvent) -> EventResult {
    let page = workbench.store.state().file_dialog.view_height.max(1) as isize;
    let action = match key.code {
        KeyCode::Esc => KernelAction::FileDialogCancel,
        KeyCode::Enter => KernelAction::FileDialogAccept,
        KeyCode::Tab => KernelAction::FileDialogCycleFilter,
        KeyCode::Up => KernelAction::FileDialogMoveSelection(-1),
        KeyCode::Down => KernelAction::FileDialogMoveSelection(1),
        KeyCode::PageUp => KernelAction::FileDialogMoveSelection(-page),
        KeyCode::PageDown => KernelAction::FileDialogMoveSelection(page),
        KeyCode::Backspace => KernelAction::FileDialogBackspace,
        KeyCode::Delete => KernelAction::FileDialogDelete,
        KeyCode::Left => KernelAction::FileDialogCursorLeft,
        KeyCode::Right => KernelAction::FileDialogCursorRight,
        _ => match is_text_input(key) {
            Some(ch) => KernelAction::FileDialogAppend(ch),
            // Dialogs are modal.
            None => return EventResult::Consumed,
        },
    };
    workbench.dispatch_kernel(action);
    EventResult::Consumed
}

fn handle_color_dialog_key(workbench: &mut Workbench, key: &KeyEvent) -> EventResult {
    let action = match key.code {
        KeyCode::Esc => KernelAction::ColorDialogCancel,
        KeyCode::Enter => KernelAction::ColorDialogAccept,
        KeyCode::Left => KernelAction::ColorDialogMoveSwatch { dx: -1, dy: 0 },
        KeyCode::Right => KernelAction::ColorDialogMoveSwatch { dx: 1, dy: 0 },
        KeyCode::Up => KernelAction::ColorDialogMoveSwatch { dx: 0, dy: -1 },
        KeyCode::Down => KernelAction::ColorDialogMoveSwatch { dx: 0, dy: 1 },
        KeyCode::Backspace => KernelAction::ColorDialogBackspace,
        _ => match is_text_input(key) {
            Some(ch) => KernelAction::ColorDialogAppend(ch),
            None => return EventResult::Consumed,
        },
    };
    workbench.dispatch_kernel(action);
    EventResult::Consumed
}

fn handle_menu_key(workbench: &mut Workbench, key: &KeyEvent) -> EventResult {
    let state = workbench.store.state();
    let page = state
        .menu
        .open_menu()
        .map(|menu| {
            let count = state.menu.items(menu, &state.document.font().family).len();
            state.menu.visible_range(count).len()
        })
        .unwrap_or(1)
        .max(1) as isize;
    let action = match key.code {
        KeyCode::Esc | KeyCode::F(10) => KernelAction::MenuClose,
        KeyCode::Left => KernelAction::MenuSwitch(-1),
        KeyCode::Right => KernelAction::MenuSwitch(1),
        KeyCode::Up => KernelAction::MenuMoveSelection(-1),
        KeyCode::Down => KernelAction::MenuMoveSelection(1),
        KeyCode::PageUp => KernelAction::MenuScroll(-page),
        KeyCode::PageDown => KernelAction::MenuScroll(page),
        KeyCode::Enter | KeyCode::Char(' ') => KernelAction::MenuActivate,
        _ => {
            // Shortcuts still work while a menu is showing.
            let command = workbench
                .keybindings
                .resolve(KeybindingContext::Global, &key.key())
                .cloned();
            return match command {
                Some(command) => {
                    if !matches!(command, Command::OpenMenu(_)) {
                        workbench.dispatch_kernel(KernelAction::MenuClose);
                    }
                    workbench.dispatch_kernel(KernelAction::RunCommand(command));
                    EventResult::Consumed
                }
                None => EventResult::Consumed,
            };
        }
    };
    workbench.dispatch_kernel(action);
    EventResult::Consumed
}

fn handle_editor_key(workbench: &mut Workbench, key: &KeyEvent) -> EventResult {
    let command = workbench
        .keybindings
        .resolve(KeybindingContext::Editor, &key.key())
        .cloned();
    let command = match command {
        Some(command) => command,
        None => match is_text_input(key) {
            Some(ch) => Command::InsertChar(ch),
            None => return EventResult::Ignored,
        },
    };
    consumed_if(workbench.dispatch_kernel(KernelAction::RunCommand(command)))
}
