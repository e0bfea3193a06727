use serde_json::Value;

use crate::ui::action::Action;
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_status_action(&mut self, action: Action) {
        let status = &mut self.status;
        match action {
            Action::SetGlobalLoading(loading) => status.global_loading = loading,
            Action::SetComponentLoading { component, loading } => {
                status.component_loading.insert(component, loading);
            }
            Action::SetGlobalError(error) => {
                status.global_error = Some(error.unwrap_or(Value::Null));
            }
            Action::SetComponentError { component, error } => {
                status.component_errors.insert(component, error);
            }
            Action::ClearGlobalError => status.global_error = None,
            Action::ClearComponentError(component) => {
                status.component_errors.remove(&component);
            }
            Action::SaveScrollPosition {
                component,
                position,
            } => {
                self.scroll_positions.insert(component, position);
            }
            Action::UpdatePerformanceStats {
                render_time,
                memory_usage,
            } => self.performance.record_render(render_time, memory_usage),
            _ => {}
        }
    }
}
