use crate::ui::action::Action;
use crate::ui::layout::ModalState;
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_layout_action(&mut self, action: Action) {
        let layout = &mut self.layout;
        match action {
            Action::SetActiveTab(tab) => layout.activate_tab(tab),
            Action::ToggleSidebar => layout.sidebar_open = !layout.sidebar_open,
            Action::SetSidebarOpen(open) => layout.sidebar_open = open,
            Action::ToggleSidebarCollapsed => {
                layout.sidebar_collapsed = !layout.sidebar_collapsed;
            }
            Action::SetSidebarCollapsed(collapsed) => layout.sidebar_collapsed = collapsed,
            Action::TogglePanel(panel) => {
                let open = layout.panel_open(panel);
                layout.set_panel_open(panel, !open);
            }
            Action::SetPanelOpen { panel, open } => layout.set_panel_open(panel, open),
            Action::OpenModal { modal, data } => {
                layout.active_modal = Some(ModalState { modal, data });
            }
            Action::CloseModal => layout.active_modal = None,
            _ => {}
        }
    }
}
