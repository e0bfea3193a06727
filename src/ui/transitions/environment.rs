use crate::ui::action::Action;
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_environment_action(&mut self, action: Action) {
        match action {
            Action::UpdateViewportSize(size) => {
                self.viewport = self.viewport.resized(size);
                if self.viewport.is_mobile() {
                    self.layout.sidebar_collapsed = true;
                    self.layout.chat_panel_open = true;
                    self.layout.contacts_panel_open = false;
                }
            }
            Action::SetOnlineStatus(online) => self.environment.online = online,
            Action::SetFocusStatus(focused) => self.environment.focused = focused,
            Action::SetVisibilityStatus(visibility) => self.environment.visibility = visibility,
            _ => {}
        }
    }
}
