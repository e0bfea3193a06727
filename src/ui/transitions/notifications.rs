use crate::ui::action::Action;
use crate::ui::context::TransitionContext;
use crate::ui::notifications::{NotificationId, ToastId};
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_notification_action(
        &mut self,
        action: Action,
        ctx: &TransitionContext<'_>,
    ) {
        let state = &mut self.notifications;
        match action {
            Action::AddNotification(input) => {
                let id = NotificationId(ctx.next_id());
                state.push_notification(input.into_notification(id, ctx.now()));
            }
            Action::MarkNotificationAsRead(id) => state.mark_read(id),
            Action::MarkAllNotificationsAsRead => state.mark_all_read(),
            Action::RemoveNotification(id) => state.remove_notification(id),
            Action::ClearNotifications => state.notifications.clear(),
            Action::AddToast(input) => {
                let id = ToastId(ctx.next_id());
                state.push_toast(input.into_toast(id, ctx.now()));
            }
            Action::RemoveToast(id) => state.remove_toast(id),
            Action::ClearToasts => state.toasts.clear(),
            _ => {}
        }
    }
}
