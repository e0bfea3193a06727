//! Transitions the UI store understands
//!
//! Each variant is one named, synchronous and total state transition. The
//! serialized form is `{"type": "<snake_case name>", "payload": ...}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ui::appearance::{PreferencesPatch, RemotePreferences, Theme};
use crate::ui::layout::{ActiveTab, Panel};
use crate::ui::notifications::{NotificationId, NotificationInput, ToastId, ToastInput};
use crate::ui::overlays::{ConfirmDialogRequest, ContextMenuItem};
use crate::ui::search::SearchSurface;
use crate::ui::viewport::{ViewportSize, Visibility};

/// All UI store transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    // ========== Appearance ==========
    /// Replace the theme (persisted)
    SetTheme(Theme),
    /// Flip between light and dark (persisted)
    ToggleTheme,
    /// Seed the theme from account settings unless one is stored locally
    SyncThemeWithUserSettings(RemotePreferences),
    /// Replace the language code (persisted)
    SetLanguage(String),
    /// Shallow-merge preferences (persisted)
    UpdatePreferences(PreferencesPatch),

    // ========== Layout ==========
    /// Switch tabs, closing secondary panels
    SetActiveTab(ActiveTab),
    ToggleSidebar,
    SetSidebarOpen(bool),
    ToggleSidebarCollapsed,
    SetSidebarCollapsed(bool),
    TogglePanel(Panel),
    SetPanelOpen { panel: Panel, open: bool },
    OpenModal {
        modal: String,
        #[serde(default)]
        data: Value,
    },
    CloseModal,

    // ========== Overlays ==========
    ShowConfirmDialog(ConfirmDialogRequest),
    HideConfirmDialog,
    ShowContextMenu {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        items: Vec<ContextMenuItem>,
    },
    HideContextMenu,
    StartDrag {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        data: Value,
    },
    EndDrag,
    StartResize(String),
    EndResize,

    // ========== Notifications & toasts ==========
    AddNotification(NotificationInput),
    MarkNotificationAsRead(NotificationId),
    MarkAllNotificationsAsRead,
    RemoveNotification(NotificationId),
    ClearNotifications,
    AddToast(ToastInput),
    RemoveToast(ToastId),
    ClearToasts,

    // ========== Viewport & environment ==========
    UpdateViewportSize(ViewportSize),
    SetOnlineStatus(bool),
    SetFocusStatus(bool),
    SetVisibilityStatus(Visibility),

    // ========== Loading & errors ==========
    SetGlobalLoading(bool),
    SetComponentLoading {
        component: String,
        #[serde(default)]
        loading: bool,
    },
    /// A missing payload still raises the error, as `null`
    SetGlobalError(Option<Value>),
    SetComponentError {
        component: String,
        #[serde(default)]
        error: Value,
    },
    ClearGlobalError,
    ClearComponentError(String),

    // ========== Scroll & keyboard ==========
    SaveScrollPosition { component: String, position: f64 },
    SetCurrentFocus(Option<String>),
    UpdateTabIndex(i32),
    /// Merge shortcut -> action-name bindings into the table
    UpdateShortcuts(BTreeMap<String, String>),

    // ========== Search ==========
    UpdateGlobalSearch(String),
    UpdateComponentSearch {
        component: SearchSurface,
        query: String,
    },
    /// Clear one surface, or everything when no surface is given
    ClearSearch(Option<SearchSurface>),
    UpdateSearchFilters(BTreeMap<String, Value>),
    SetSearchResults {
        scope: String,
        #[serde(default)]
        results: Value,
    },
    ClearSearchHistory,

    // ========== Clipboard ==========
    UpdateClipboard {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        data: Value,
    },
    ClearClipboard,

    // ========== Performance ==========
    UpdatePerformanceStats {
        #[serde(default)]
        render_time: f64,
        #[serde(default)]
        memory_usage: Option<f64>,
    },

    // ========== Session ==========
    /// Back to the construction default, keeping appearance and viewport
    ResetUiState,
}

impl Action {
    /// The snake_case transition name (matches the serialized `type` tag)
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetTheme(_) => "set_theme",
            Action::ToggleTheme => "toggle_theme",
            Action::SyncThemeWithUserSettings(_) => "sync_theme_with_user_settings",
            Action::SetLanguage(_) => "set_language",
            Action::UpdatePreferences(_) => "update_preferences",
            Action::SetActiveTab(_) => "set_active_tab",
            Action::ToggleSidebar => "toggle_sidebar",
            Action::SetSidebarOpen(_) => "set_sidebar_open",
            Action::ToggleSidebarCollapsed => "toggle_sidebar_collapsed",
            Action::SetSidebarCollapsed(_) => "set_sidebar_collapsed",
            Action::TogglePanel(_) => "toggle_panel",
            Action::SetPanelOpen { .. } => "set_panel_open",
            Action::OpenModal { .. } => "open_modal",
            Action::CloseModal => "close_modal",
            Action::ShowConfirmDialog(_) => "show_confirm_dialog",
            Action::HideConfirmDialog => "hide_confirm_dialog",
            Action::ShowContextMenu { .. } => "show_context_menu",
            Action::HideContextMenu => "hide_context_menu",
            Action::StartDrag { .. } => "start_drag",
            Action::EndDrag => "end_drag",
            Action::StartResize(_) => "start_resize",
            Action::EndResize => "end_resize",
            Action::AddNotification(_) => "add_notification",
            Action::MarkNotificationAsRead(_) => "mark_notification_as_read",
            Action::MarkAllNotificationsAsRead => "mark_all_notifications_as_read",
            Action::RemoveNotification(_) => "remove_notification",
            Action::ClearNotifications => "clear_notifications",
            Action::AddToast(_) => "add_toast",
            Action::RemoveToast(_) => "remove_toast",
            Action::ClearToasts => "clear_toasts",
            Action::UpdateViewportSize(_) => "update_viewport_size",
            Action::SetOnlineStatus(_) => "set_online_status",
            Action::SetFocusStatus(_) => "set_focus_status",
            Action::SetVisibilityStatus(_) => "set_visibility_status",
            Action::SetGlobalLoading(_) => "set_global_loading",
            Action::SetComponentLoading { .. } => "set_component_loading",
            Action::SetGlobalError(_) => "set_global_error",
            Action::SetComponentError { .. } => "set_component_error",
            Action::ClearGlobalError => "clear_global_error",
            Action::ClearComponentError(_) => "clear_component_error",
            Action::SaveScrollPosition { .. } => "save_scroll_position",
            Action::SetCurrentFocus(_) => "set_current_focus",
            Action::UpdateTabIndex(_) => "update_tab_index",
            Action::UpdateShortcuts(_) => "update_shortcuts",
            Action::UpdateGlobalSearch(_) => "update_global_search",
            Action::UpdateComponentSearch { .. } => "update_component_search",
            Action::ClearSearch(_) => "clear_search",
            Action::UpdateSearchFilters(_) => "update_search_filters",
            Action::SetSearchResults { .. } => "set_search_results",
            Action::ClearSearchHistory => "clear_search_history",
            Action::UpdateClipboard { .. } => "update_clipboard",
            Action::ClearClipboard => "clear_clipboard",
            Action::UpdatePerformanceStats { .. } => "update_performance_stats",
            Action::ResetUiState => "reset_ui_state",
        }
    }

    /// Whether this transition writes through to the persistent backend
    pub fn persists(&self) -> bool {
        matches!(
            self,
            Action::SetTheme(_)
                | Action::ToggleTheme
                | Action::SetLanguage(_)
                | Action::UpdatePreferences(_)
        )
    }
}
