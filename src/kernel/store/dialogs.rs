use crate::kernel::action::Action;
use crate::kernel::dialog::{FileDialogMode, FileDialogOutcome};
use crate::kernel::Effect;
use crate::models::TagName;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_file_dialog_action(&mut self, action: Action) -> DispatchResult {
        if !self.state.file_dialog.visible {
            return DispatchResult::unchanged();
        }

        let filters = &self.state.file_filters;
        let dialog = &mut self.state.file_dialog;
        match action {
            Action::FileDialogAppend(ch) => {
                dialog.error = None;
                dialog.input.insert(ch);
                DispatchResult::changed(true)
            }
            Action::FileDialogBackspace => DispatchResult::changed(dialog.input.backspace()),
            Action::FileDialogDelete => DispatchResult::changed(dialog.input.delete()),
            Action::FileDialogCursorLeft => DispatchResult::changed(dialog.input.left()),
            Action::FileDialogCursorRight => DispatchResult::changed(dialog.input.right()),
            Action::FileDialogMoveSelection(delta) => {
                DispatchResult::changed(dialog.move_selection(delta, filters))
            }
            Action::FileDialogSelect(index) => {
                dialog.select(index, filters);
                DispatchResult::changed(true)
            }
            Action::FileDialogCycleFilter => DispatchResult::changed(dialog.cycle_filter(filters)),
            Action::FileDialogCancel => {
                tracing::debug!(mode = dialog.mode.title(), "file dialog cancelled");
                DispatchResult::changed(dialog.close())
            }
            Action::FileDialogAccept => {
                match dialog.resolve(filters, &self.state.config.default_extension) {
                    FileDialogOutcome::Nothing => DispatchResult::unchanged(),
                    FileDialogOutcome::Navigate(dir) => {
                        dialog.input.clear();
                        DispatchResult::effect(Effect::ListDir(dir), true)
                    }
                    FileDialogOutcome::Accept(path) => {
                        let mode = dialog.mode;
                        dialog.close();
                        let effect = match mode {
                            FileDialogMode::Open => Effect::ReadFile(path),
                            FileDialogMode::SaveAs => Effect::WriteFile {
                                path,
                                content: self.state.document.contents(),
                            },
                        };
                        DispatchResult::effect(effect, true)
                    }
                }
            }
            _ => DispatchResult::unchanged(),
        }
    }

    pub(super) fn reduce_color_dialog_action(&mut self, action: Action) -> DispatchResult {
        let dialog = &mut self.state.color_dialog;
        if !dialog.visible {
            return DispatchResult::unchanged();
        }

        match action {
            Action::ColorDialogAppend(ch) => {
                dialog.error = None;
                dialog.input.insert(ch);
                DispatchResult::changed(true)
            }
            Action::ColorDialogBackspace => DispatchResult::changed(dialog.input.backspace()),
            Action::ColorDialogMoveSwatch { dx, dy } => {
                DispatchResult::changed(dialog.move_swatch(dx, dy))
            }
            Action::ColorDialogPick(index) => {
                dialog.pick(index);
                DispatchResult::changed(true)
            }
            Action::ColorDialogCancel => DispatchResult::changed(dialog.close()),
            Action::ColorDialogAccept => {
                let Some(color) = dialog.accept() else {
                    return DispatchResult::changed(true);
                };
                dialog.close();
                match self.state.document.highlight(color) {
                    Ok(()) => {
                        tracing::debug!(color = %color, "highlight applied");
                        self.state.status = None;
                        DispatchResult::changed(true)
                    }
                    Err(err) => self.style_error(TagName::Highlight.as_str(), err),
                }
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
