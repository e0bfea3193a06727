//! Sidebar, panels, tabs and the active modal

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    Chats,
    Contacts,
    Ai,
    Settings,
    Profile,
}

/// Named visibility flags for UI regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Chat,
    Contacts,
    Ai,
    Settings,
    Profile,
    Call,
    Search,
    Notifications,
}

impl Panel {
    /// Panels tied to a tab; switching tabs closes all of them
    pub const SECONDARY: [Panel; 5] = [
        Panel::Contacts,
        Panel::Ai,
        Panel::Settings,
        Panel::Profile,
        Panel::Call,
    ];
}

/// The open modal; tag and payload only ever change together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalState {
    pub modal: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
    pub chat_panel_open: bool,
    pub contacts_panel_open: bool,
    pub ai_panel_open: bool,
    pub settings_panel_open: bool,
    pub profile_panel_open: bool,
    pub call_panel_open: bool,
    pub search_panel_open: bool,
    pub notifications_panel_open: bool,
    pub active_tab: ActiveTab,
    pub active_modal: Option<ModalState>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            sidebar_collapsed: false,
            chat_panel_open: true,
            contacts_panel_open: false,
            ai_panel_open: false,
            settings_panel_open: false,
            profile_panel_open: false,
            call_panel_open: false,
            search_panel_open: false,
            notifications_panel_open: false,
            active_tab: ActiveTab::Chats,
            active_modal: None,
        }
    }
}

impl LayoutState {
    pub fn panel_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Chat => self.chat_panel_open,
            Panel::Contacts => self.contacts_panel_open,
            Panel::Ai => self.ai_panel_open,
            Panel::Settings => self.settings_panel_open,
            Panel::Profile => self.profile_panel_open,
            Panel::Call => self.call_panel_open,
            Panel::Search => self.search_panel_open,
            Panel::Notifications => self.notifications_panel_open,
        }
    }

    pub fn set_panel_open(&mut self, panel: Panel, open: bool) {
        let flag = match panel {
            Panel::Chat => &mut self.chat_panel_open,
            Panel::Contacts => &mut self.contacts_panel_open,
            Panel::Ai => &mut self.ai_panel_open,
            Panel::Settings => &mut self.settings_panel_open,
            Panel::Profile => &mut self.profile_panel_open,
            Panel::Call => &mut self.call_panel_open,
            Panel::Search => &mut self.search_panel_open,
            Panel::Notifications => &mut self.notifications_panel_open,
        };
        *flag = open;
    }

    /// Switch tabs and close every secondary panel
    pub fn activate_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        for panel in Panel::SECONDARY {
            self.set_panel_open(panel, false);
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.active_modal.is_some()
    }
}
