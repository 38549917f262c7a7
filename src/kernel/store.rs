use crate::core::Command;
use crate::kernel::dialog::FileDialogMode;
use crate::kernel::state::StatusMessage;
use crate::kernel::viewport;
use crate::models::{Granularity, StyleError, TagName, ToggleOutcome};

use super::action::FileOp;
use super::{Action, AppState, Effect};

mod dialogs;
mod menu_bar;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::OpenPath(path) => DispatchResult::effect(Effect::ReadFile(path), false),
            Action::Paste(text) => self.paste(&text),
            Action::Tick => DispatchResult::unchanged(),
            Action::FileLoaded { path, content } => {
                tracing::info!(path = %path.display(), bytes = content.len(), "file opened");
                self.state.status = Some(StatusMessage::info(format!("Opened {}", path.display())));
                self.state.document.load(path, &content);
                self.state.viewport.reset();
                self.follow_cursor();
                DispatchResult::effect(Effect::SetTitle(self.state.title()), true)
            }
            Action::FileSaved { path } => {
                tracing::info!(path = %path.display(), "file saved");
                self.state.status = Some(StatusMessage::info(format!("Saved {}", path.display())));
                self.state.document.mark_saved(path);
                DispatchResult::effect(Effect::SetTitle(self.state.title()), true)
            }
            Action::FileFailed { path, op, error } => {
                let verb = match op {
                    FileOp::Read => "open",
                    FileOp::Write => "save",
                };
                tracing::error!(path = %path.display(), error = %error, "could not {verb} file");
                self.state.status = Some(StatusMessage::error(format!(
                    "Could not {verb} {}: {error}",
                    path.display()
                )));
                DispatchResult::changed(true)
            }
            Action::DirListed { dir, entries } => {
                if !self.state.file_dialog.visible {
                    return DispatchResult::unchanged();
                }
                self.state.file_dialog.set_listing(dir, entries);
                DispatchResult::changed(true)
            }
            Action::DirListFailed { dir, error } => {
                tracing::warn!(dir = %dir.display(), error = %error, "could not list directory");
                if !self.state.file_dialog.visible {
                    return DispatchResult::unchanged();
                }
                self.state.file_dialog.error = Some(format!("{}: {error}", dir.display()));
                DispatchResult::changed(true)
            }
            Action::SetEditorViewSize { width, height } => {
                let changed = self.state.viewport.set_size(width, height);
                if changed {
                    self.follow_cursor();
                }
                DispatchResult::changed(changed)
            }
            Action::SetMenuViewHeight { rows } => {
                DispatchResult::changed(self.state.menu.set_max_visible(rows))
            }
            Action::SetFileDialogViewHeight { rows } => {
                let changed = self.state.file_dialog.view_height != rows;
                self.state.file_dialog.view_height = rows;
                DispatchResult::changed(changed)
            }
            Action::EditorMouseDown {
                pos,
                granularity,
                extend,
            } => {
                let doc = &mut self.state.document;
                if extend {
                    if doc.buffer().selection().is_none() {
                        let cursor = doc.buffer().cursor();
                        doc.begin_selection(cursor, Granularity::Char);
                    }
                    doc.extend_selection(pos);
                } else {
                    doc.begin_selection(pos, granularity);
                }
                self.follow_cursor();
                DispatchResult::changed(true)
            }
            Action::EditorMouseDrag { pos } => {
                if self.state.document.buffer().selection().is_none() {
                    return DispatchResult::unchanged();
                }
                let prev = self.state.document.buffer().cursor();
                self.state.document.extend_selection(pos);
                self.follow_cursor();
                DispatchResult::changed(prev != self.state.document.buffer().cursor())
            }
            Action::EditorScroll { delta } => {
                let lines = delta * self.state.config.scroll_step() as isize;
                let buffer = self.state.document.buffer();
                DispatchResult::changed(self.state.viewport.scroll_lines(lines, buffer))
            }
            action @ (Action::MenuOpen(_)
            | Action::MenuClose
            | Action::MenuMoveSelection(_)
            | Action::MenuSwitch(_)
            | Action::MenuSelect(_)
            | Action::MenuScroll(_)
            | Action::MenuActivate) => self.reduce_menu_action(action),
            action @ (Action::FileDialogAppend(_)
            | Action::FileDialogBackspace
            | Action::FileDialogDelete
            | Action::FileDialogCursorLeft
            | Action::FileDialogCursorRight
            | Action::FileDialogMoveSelection(_)
            | Action::FileDialogSelect(_)
            | Action::FileDialogCycleFilter
            | Action::FileDialogAccept
            | Action::FileDialogCancel) => self.reduce_file_dialog_action(action),
            action @ (Action::ColorDialogAppend(_)
            | Action::ColorDialogBackspace
            | Action::ColorDialogMoveSwatch { .. }
            | Action::ColorDialogPick(_)
            | Action::ColorDialogAccept
            | Action::ColorDialogCancel) => self.reduce_color_dialog_action(action),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        tracing::debug!(command = command.name(), "run command");
        match command {
            Command::New => {
                self.state.menu.close();
                self.state.document.new_document();
                self.state.viewport.reset();
                self.state.status = None;
                DispatchResult::effect(Effect::SetTitle(self.state.title()), true)
            }
            Command::Open => {
                self.state.menu.close();
                self.open_file_dialog(FileDialogMode::Open, "")
            }
            Command::Save => {
                self.state.menu.close();
                match self.state.document.path() {
                    Some(path) => DispatchResult::effect(
                        Effect::WriteFile {
                            path: path.to_path_buf(),
                            content: self.state.document.contents(),
                        },
                        true,
                    ),
                    None => self.open_file_dialog(FileDialogMode::SaveAs, ""),
                }
            }
            Command::Exit => {
                self.state.should_quit = true;
                DispatchResult::effect(Effect::Quit, true)
            }
            Command::ChangeFont(family) => {
                self.state.menu.close();
                tracing::info!(family = %family, "font changed");
                self.state.document.change_font(&family);
                DispatchResult::changed(true)
            }
            Command::ToggleBold => {
                self.state.menu.close();
                let result = self.state.document.toggle_bold();
                self.style_result("bold", result)
            }
            Command::ToggleItalic => {
                self.state.menu.close();
                let result = self.state.document.toggle_italic();
                self.style_result("italic", result)
            }
            Command::Highlight => {
                self.state.menu.close();
                if !self.state.document.has_selection() {
                    return self.style_error("highlight", StyleError::NoSelection);
                }
                let current = self.state.document.tags().style(TagName::Highlight).background;
                self.state.color_dialog.open(current);
                DispatchResult::changed(true)
            }
            Command::OpenMenu(index) => self.reduce_menu_action(Action::MenuOpen(index)),
            Command::FocusMenuBar => self.reduce_menu_action(Action::MenuOpen(0)),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "ignoring unknown command");
                DispatchResult::unchanged()
            }
            other => self.dispatch_edit_command(other),
        }
    }

    fn dispatch_edit_command(&mut self, command: Command) -> DispatchResult {
        let doc = &mut self.state.document;
        let changed = match command {
            Command::CursorLeft => {
                doc.move_left(false);
                true
            }
            Command::CursorRight => {
                doc.move_right(false);
                true
            }
            Command::CursorUp => {
                doc.move_up(false);
                true
            }
            Command::CursorDown => {
                doc.move_down(false);
                true
            }
            Command::CursorLineStart => {
                doc.move_line_start(false);
                true
            }
            Command::CursorLineEnd => {
                doc.move_line_end(false);
                true
            }
            Command::CursorFileStart => {
                doc.move_file_start(false);
                true
            }
            Command::CursorFileEnd => {
                doc.move_file_end(false);
                true
            }
            Command::SelectLeft => {
                doc.move_left(true);
                true
            }
            Command::SelectRight => {
                doc.move_right(true);
                true
            }
            Command::SelectUp => {
                doc.move_up(true);
                true
            }
            Command::SelectDown => {
                doc.move_down(true);
                true
            }
            Command::SelectLineStart => {
                doc.move_line_start(true);
                true
            }
            Command::SelectLineEnd => {
                doc.move_line_end(true);
                true
            }
            Command::SelectAll => {
                doc.select_all();
                true
            }
            Command::ClearSelection => doc.clear_selection(),
            Command::InsertChar(c) => {
                doc.insert_char(c);
                true
            }
            Command::InsertNewline => {
                doc.insert_char('\n');
                true
            }
            Command::InsertTab => {
                doc.insert_char('\t');
                true
            }
            Command::DeleteBackward => doc.delete_backward(),
            Command::DeleteForward => doc.delete_forward(),
            Command::PageUp | Command::PageDown => {
                let page = self.state.viewport.height.max(1) as isize;
                let delta = if command == Command::PageUp { -page } else { page };
                self.state.document.move_vertical(delta, false);
                true
            }
            Command::ScrollUp | Command::ScrollDown => {
                let step = self.state.config.scroll_step() as isize;
                let delta = if command == Command::ScrollUp { -step } else { step };
                let buffer = self.state.document.buffer();
                return DispatchResult::changed(self.state.viewport.scroll_lines(delta, buffer));
            }
            _ => false,
        };

        if changed {
            self.follow_cursor();
        }
        DispatchResult::changed(changed)
    }

    fn paste(&mut self, text: &str) -> DispatchResult {
        if text.is_empty() {
            return DispatchResult::unchanged();
        }
        // Dialog inputs are single-line.
        let first_line = text.lines().next().unwrap_or_default();
        if self.state.file_dialog.visible {
            first_line.chars().for_each(|ch| self.state.file_dialog.input.insert(ch));
            return DispatchResult::changed(true);
        }
        if self.state.color_dialog.visible {
            first_line.chars().for_each(|ch| self.state.color_dialog.input.insert(ch));
            return DispatchResult::changed(true);
        }
        if self.state.menu.is_open() {
            return DispatchResult::unchanged();
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.state.document.insert_str(&normalized);
        self.follow_cursor();
        DispatchResult::changed(true)
    }

    fn style_result(
        &mut self,
        tag: &str,
        result: Result<ToggleOutcome, StyleError>,
    ) -> DispatchResult {
        match result {
            Ok(outcome) => {
                tracing::debug!(tag, ?outcome, "style toggled");
                self.state.status = None;
                DispatchResult::changed(true)
            }
            Err(err) => self.style_error(tag, err),
        }
    }

    fn style_error(&mut self, tag: &str, err: StyleError) -> DispatchResult {
        tracing::warn!(tag, error = %err, "style command ignored");
        self.state.status = Some(StatusMessage::warning(err.to_string()));
        DispatchResult::changed(true)
    }

    fn open_file_dialog(&mut self, mode: FileDialogMode, initial_name: &str) -> DispatchResult {
        let dir = self.state.dialog_start_dir();
        self.state.file_dialog.open(mode, dir.clone(), initial_name);
        DispatchResult::effect(Effect::ListDir(dir), true)
    }

    fn follow_cursor(&mut self) {
        viewport::follow_cursor(
            &mut self.state.viewport,
            self.state.document.buffer(),
            self.state.config.tab_size,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
