use crate::ui::action::Action;
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_keyboard_action(&mut self, action: Action) {
        let keyboard = &mut self.keyboard;
        match action {
            Action::SetCurrentFocus(focus) => keyboard.current_focus = focus,
            Action::UpdateTabIndex(index) => keyboard.tab_index = index,
            Action::UpdateShortcuts(bindings) => keyboard.shortcuts.merge(bindings),
            _ => {}
        }
    }
}
