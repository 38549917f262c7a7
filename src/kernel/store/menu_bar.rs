use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_menu_action(&mut self, action: Action) -> DispatchResult {
        let family = self.state.document.font().family.clone();
        let menu = &mut self.state.menu;
        match action {
            Action::MenuOpen(index) => {
                if menu.open_menu() == Some(index) {
                    return DispatchResult::changed(menu.close());
                }
                DispatchResult::changed(menu.open(index, &family))
            }
            Action::MenuClose => DispatchResult::changed(menu.close()),
            Action::MenuMoveSelection(delta) => {
                DispatchResult::changed(menu.move_selection(delta, &family))
            }
            Action::MenuSwitch(delta) => DispatchResult::changed(menu.switch_menu(delta, &family)),
            Action::MenuSelect(index) => DispatchResult::changed(menu.select(index, &family)),
            Action::MenuScroll(delta) => DispatchResult::changed(menu.scroll_by(delta, &family)),
            Action::MenuActivate => {
                let Some(command) = menu.selected_command(&family) else {
                    return DispatchResult::unchanged();
                };
                menu.close();
                let mut result = self.dispatch_command(command);
                result.state_changed = true;
                result
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
