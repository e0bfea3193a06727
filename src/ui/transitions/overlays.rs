use crate::ui::action::Action;
use crate::ui::overlays::{
    ClipboardEntry, ConfirmDialog, ContextMenu, DragState, ResizeState,
};
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_overlay_action(&mut self, action: Action) {
        let overlays = &mut self.overlays;
        match action {
            Action::ShowConfirmDialog(request) => {
                overlays.confirm_dialog = ConfirmDialog::shown(request);
            }
            Action::HideConfirmDialog => overlays.confirm_dialog = ConfirmDialog::closed(),
            Action::ShowContextMenu { x, y, items } => {
                overlays.context_menu = ContextMenu::at(x, y, items);
            }
            Action::HideContextMenu => overlays.context_menu = ContextMenu::closed(),
            Action::StartDrag { kind, data } => {
                overlays.drag = Some(DragState { kind, data });
            }
            Action::EndDrag => overlays.drag = None,
            Action::StartResize(kind) => overlays.resize = Some(ResizeState { kind }),
            Action::EndResize => overlays.resize = None,
            Action::UpdateClipboard { kind, data } => {
                self.clipboard = Some(ClipboardEntry { kind, data });
            }
            Action::ClearClipboard => self.clipboard = None,
            _ => {}
        }
    }
}
