//! The transition function.
//!
//! `UiState::apply` is synchronous and total: every action yields a new
//! state plus the effects the store should run afterwards. Handlers are
//! grouped by concern, one file per group.

mod appearance;
mod environment;
mod keyboard;
mod layout;
mod notifications;
mod overlays;
mod search;
mod status;

use crate::ui::action::Action;
use crate::ui::context::TransitionContext;
use crate::ui::effect::Effect;
use crate::ui::state::UiState;

impl UiState {
    pub fn apply(&mut self, action: Action, ctx: &TransitionContext<'_>) -> Vec<Effect> {
        let mut effects = Vec::new();

        match action {
            Action::SetTheme(_)
            | Action::ToggleTheme
            | Action::SyncThemeWithUserSettings(_)
            | Action::SetLanguage(_)
            | Action::UpdatePreferences(_) => {
                self.handle_appearance_action(action, ctx, &mut effects);
            }

            Action::SetActiveTab(_)
            | Action::ToggleSidebar
            | Action::SetSidebarOpen(_)
            | Action::ToggleSidebarCollapsed
            | Action::SetSidebarCollapsed(_)
            | Action::TogglePanel(_)
            | Action::SetPanelOpen { .. }
            | Action::OpenModal { .. }
            | Action::CloseModal => self.handle_layout_action(action),

            Action::ShowConfirmDialog(_)
            | Action::HideConfirmDialog
            | Action::ShowContextMenu { .. }
            | Action::HideContextMenu
            | Action::StartDrag { .. }
            | Action::EndDrag
            | Action::StartResize(_)
            | Action::EndResize
            | Action::UpdateClipboard { .. }
            | Action::ClearClipboard => self.handle_overlay_action(action),

            Action::AddNotification(_)
            | Action::MarkNotificationAsRead(_)
            | Action::MarkAllNotificationsAsRead
            | Action::RemoveNotification(_)
            | Action::ClearNotifications
            | Action::AddToast(_)
            | Action::RemoveToast(_)
            | Action::ClearToasts => self.handle_notification_action(action, ctx),

            Action::UpdateViewportSize(_)
            | Action::SetOnlineStatus(_)
            | Action::SetFocusStatus(_)
            | Action::SetVisibilityStatus(_) => self.handle_environment_action(action),

            Action::SetGlobalLoading(_)
            | Action::SetComponentLoading { .. }
            | Action::SetGlobalError(_)
            | Action::SetComponentError { .. }
            | Action::ClearGlobalError
            | Action::ClearComponentError(_)
            | Action::SaveScrollPosition { .. }
            | Action::UpdatePerformanceStats { .. } => self.handle_status_action(action),

            Action::SetCurrentFocus(_) | Action::UpdateTabIndex(_) | Action::UpdateShortcuts(_) => {
                self.handle_keyboard_action(action)
            }

            Action::UpdateGlobalSearch(_)
            | Action::UpdateComponentSearch { .. }
            | Action::ClearSearch(_)
            | Action::UpdateSearchFilters(_)
            | Action::SetSearchResults { .. }
            | Action::ClearSearchHistory => self.handle_search_action(action),

            Action::ResetUiState => {
                *self = self.reset(ctx.defaults);
            }
        }

        effects
    }
}
