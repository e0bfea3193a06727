//! The UI state aggregate (one per session)

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::config::{default_shortcuts, Config, ShortcutMap};
use crate::ui::appearance::{Preferences, Theme};
use crate::ui::layout::LayoutState;
use crate::ui::metrics::PerformanceStats;
use crate::ui::notifications::NotificationState;
use crate::ui::overlays::{ClipboardEntry, OverlayState};
use crate::ui::search::SearchState;
use crate::ui::viewport::{EnvironmentStatus, Viewport};

/// Loading flags and recorded errors.
///
/// A component missing from a map has no explicit state, which is not the
/// same as an explicit `false` / `null` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusState {
    pub global_loading: bool,
    pub component_loading: BTreeMap<String, bool>,
    pub global_error: Option<Value>,
    pub component_errors: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyboardState {
    pub current_focus: Option<String>,
    pub tab_index: i32,
    pub shortcuts: ShortcutMap,
}

/// Values a session starts from when nothing is persisted, and that a reset
/// returns to.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDefaults {
    pub theme: Theme,
    pub language: String,
    pub viewport: Viewport,
    pub shortcuts: ShortcutMap,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "en".to_string(),
            viewport: Viewport::new(1280, 800),
            shortcuts: default_shortcuts(),
        }
    }
}

impl SessionDefaults {
    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: Theme::from_dark_flag(config.theme.prefers_dark()),
            language: config.fallback_language(),
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            shortcuts: config.shortcuts.clone(),
        }
    }
}

/// Appearance values read back from the persistent backend; `None` means
/// missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedAppearance {
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub theme: Theme,
    pub language: String,
    pub preferences: Preferences,
    pub layout: LayoutState,
    pub overlays: OverlayState,
    #[serde(flatten)]
    pub notifications: NotificationState,
    pub viewport: Viewport,
    pub environment: EnvironmentStatus,
    pub status: StatusState,
    pub scroll_positions: BTreeMap<String, f64>,
    pub keyboard: KeyboardState,
    pub search: SearchState,
    pub clipboard: Option<ClipboardEntry>,
    pub performance: PerformanceStats,
}

impl UiState {
    /// Session-start state: persisted appearance where available, defaults
    /// for everything else.
    pub fn initial(persisted: PersistedAppearance, defaults: &SessionDefaults) -> Self {
        Self {
            theme: persisted.theme.unwrap_or(defaults.theme),
            language: persisted
                .language
                .unwrap_or_else(|| defaults.language.clone()),
            preferences: persisted.preferences.unwrap_or_default(),
            layout: LayoutState::default(),
            overlays: OverlayState::default(),
            notifications: NotificationState::default(),
            viewport: defaults.viewport,
            environment: EnvironmentStatus::default(),
            status: StatusState::default(),
            scroll_positions: BTreeMap::new(),
            keyboard: KeyboardState {
                current_focus: None,
                tab_index: 0,
                shortcuts: defaults.shortcuts.clone(),
            },
            search: SearchState::default(),
            clipboard: None,
            performance: PerformanceStats::new(),
        }
    }

    /// Construction default, keeping theme, language, preferences and viewport
    pub fn reset(&self, defaults: &SessionDefaults) -> Self {
        let mut next = Self::initial(
            PersistedAppearance {
                theme: Some(self.theme),
                language: Some(self.language.clone()),
                preferences: Some(self.preferences.clone()),
            },
            defaults,
        );
        next.viewport = self.viewport;
        next
    }

    /// Saved scroll offset for a component (0 when never saved)
    pub fn scroll_position(&self, component: &str) -> f64 {
        self.scroll_positions.get(component).copied().unwrap_or(0.0)
    }

    /// Action name bound to a shortcut, in any spelling
    pub fn resolve_shortcut(&self, shortcut: &str) -> Option<&str> {
        self.keyboard.shortcuts.resolve(shortcut)
    }

    pub fn has_clipboard_data(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Explicit loading state for a component, if one was recorded
    pub fn component_loading(&self, component: &str) -> Option<bool> {
        self.status.component_loading.get(component).copied()
    }

    /// Whether anything is loading, globally or in any component
    pub fn is_loading(&self) -> bool {
        self.status.global_loading || self.status.component_loading.values().any(|l| *l)
    }
}
