//! The session UI store: owns the current state, runs effects, publishes
//! snapshots.

use std::sync::Arc;

use tokio::sync::watch;

use crate::data::{KeyValueStore, StorageKey};
use crate::ui::action::Action;
use crate::ui::appearance::{Preferences, Theme};
use crate::ui::context::{Clock, IdSource, RandomIds, SystemClock, TransitionContext};
use crate::ui::effect::Effect;
use crate::ui::state::{PersistedAppearance, SessionDefaults, UiState};

pub struct UiStore {
    state: Arc<UiState>,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
    defaults: SessionDefaults,
    updates: watch::Sender<Arc<UiState>>,
}

impl UiStore {
    /// Build a store over `storage`, starting from whatever appearance it holds
    pub fn new(storage: Arc<dyn KeyValueStore>, defaults: SessionDefaults) -> Self {
        Self::with_sources(storage, defaults, Arc::new(SystemClock), Arc::new(RandomIds))
    }

    /// Like [`UiStore::new`] with explicit time and id sources
    pub fn with_sources(
        storage: Arc<dyn KeyValueStore>,
        defaults: SessionDefaults,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        let persisted = load_persisted(storage.as_ref());
        tracing::debug!(
            theme = ?persisted.theme,
            language = ?persisted.language,
            has_preferences = persisted.preferences.is_some(),
            "Loaded persisted appearance"
        );

        let state = Arc::new(UiState::initial(persisted, &defaults));
        let (updates, _) = watch::channel(Arc::clone(&state));

        Self {
            state,
            storage,
            clock,
            ids,
            defaults,
            updates,
        }
    }

    /// Apply one transition, run its effects and publish the new snapshot
    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let effects = {
            let ctx = TransitionContext {
                clock: self.clock.as_ref(),
                ids: self.ids.as_ref(),
                defaults: &self.defaults,
                storage: self.storage.as_ref(),
            };
            // The watch channel holds the previous snapshot, so this clones
            // the state once per dispatch
            Arc::make_mut(&mut self.state).apply(action, &ctx)
        };
        tracing::trace!(action = name, effects = effects.len(), "Dispatched UI action");

        for effect in effects {
            self.run_effect(effect);
        }

        self.updates.send_replace(Arc::clone(&self.state));
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Persist { key, value } => {
                if let Err(e) = self.storage.set(key.as_str(), &value) {
                    tracing::warn!(key = %key, error = %e, "Failed to persist UI state");
                }
            }
        }
    }

    /// Current state; later dispatches never mutate a snapshot already handed out
    pub fn snapshot(&self) -> Arc<UiState> {
        Arc::clone(&self.state)
    }

    /// Receiver that observes every state published after a dispatch
    pub fn subscribe(&self) -> watch::Receiver<Arc<UiState>> {
        self.updates.subscribe()
    }

    pub fn get_scroll_position(&self, component: &str) -> f64 {
        self.state.scroll_position(component)
    }

    pub fn resolve_shortcut(&self, shortcut: &str) -> Option<&str> {
        self.state.resolve_shortcut(shortcut)
    }

    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }
}

/// Read the appearance keys; malformed values are reported and ignored
fn load_persisted(storage: &dyn KeyValueStore) -> PersistedAppearance {
    let read = |key: StorageKey| match storage.get(key.as_str()) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read persisted UI state");
            None
        }
    };

    let theme = read(StorageKey::Theme).and_then(|raw| match raw.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            tracing::warn!(key = %StorageKey::Theme, value = %raw, error = %e, "Ignoring malformed theme");
            None
        }
    });

    let language = read(StorageKey::Language).and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            tracing::warn!(key = %StorageKey::Language, "Ignoring empty language");
            None
        } else {
            Some(trimmed.to_string())
        }
    });

    let preferences =
        read(StorageKey::Preferences).and_then(|raw| match Preferences::from_json(&raw) {
            Ok(preferences) => Some(preferences),
            Err(e) => {
                tracing::warn!(key = %StorageKey::Preferences, error = %e, "Ignoring malformed preferences");
                None
            }
        });

    PersistedAppearance {
        theme,
        language,
        preferences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryStore, StorageError};
    use crate::ui::appearance::PreferencesPatch;
    use crate::ui::context::{FixedClock, SequentialIds};
    use crate::ui::notifications::NotificationInput;
    use chrono::{DateTime, Utc};

    /// Backend whose reads succeed and whose writes always fail
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk full".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk full".into()))
        }
    }

    fn store_over(storage: Arc<dyn KeyValueStore>) -> UiStore {
        UiStore::with_sources(
            storage,
            SessionDefaults::default(),
            Arc::new(FixedClock(DateTime::<Utc>::from_timestamp(0, 0).unwrap())),
            Arc::new(SequentialIds::new()),
        )
    }

    #[test]
    fn test_dispatch_writes_through() {
        let backend = MemoryStore::new();
        let mut store = store_over(Arc::new(backend.clone()));

        store.dispatch(Action::SetTheme(Theme::Dark));
        store.dispatch(Action::SetLanguage("es".into()));

        assert_eq!(backend.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(backend.get("language").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_state() {
        let mut store = store_over(Arc::new(FailingStore));

        store.dispatch(Action::ToggleTheme);
        store.dispatch(Action::UpdatePreferences(PreferencesPatch {
            markdown: Some(false),
            ..Default::default()
        }));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(!snapshot.preferences.markdown);
    }

    #[test]
    fn test_construction_reads_persisted_values() {
        let mut prefs = Preferences::default();
        prefs.read_receipts = false;
        let backend = MemoryStore::with_entries([
            ("theme", "dark".to_string()),
            ("language", "ja".to_string()),
            ("preferences", prefs.to_json()),
        ]);

        let store = store_over(Arc::new(backend));
        let snapshot = store.snapshot();

        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.language, "ja");
        assert!(!snapshot.preferences.read_receipts);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let backend = MemoryStore::with_entries([
            ("theme", "sepia".to_string()),
            ("preferences", "not json".to_string()),
        ]);

        let store = store_over(Arc::new(backend));
        let snapshot = store.snapshot();

        assert_eq!(snapshot.theme, Theme::Light);
        assert_eq!(snapshot.preferences, Preferences::default());
        assert_eq!(snapshot.language, "en");
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut store = store_over(Arc::new(MemoryStore::new()));
        let before = store.snapshot();

        store.dispatch(Action::AddNotification(NotificationInput::new("hi", "")));

        assert!(before.notifications.notifications.is_empty());
        assert_eq!(store.snapshot().notifications.notifications.len(), 1);
    }

    #[test]
    fn test_subscribers_see_latest_state() {
        let mut store = store_over(Arc::new(MemoryStore::new()));
        let mut rx = store.subscribe();

        store.dispatch(Action::SaveScrollPosition {
            component: "chat".into(),
            position: 64.0,
        });

        assert!(rx.has_changed().unwrap());
        let latest = rx.borrow_and_update().clone();
        assert_eq!(latest.scroll_position("chat"), 64.0);
        assert_eq!(store.get_scroll_position("chat"), 64.0);
        assert_eq!(store.get_scroll_position("other"), 0.0);
    }
}
