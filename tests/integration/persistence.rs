//! Integration tests for appearance persistence across sessions

use std::sync::Arc;

use chatdeck::data::KeyValueStore;
use chatdeck::ui::appearance::{FontSize, PreferencesPatch, RemotePreferences};
use chatdeck::ui::{Action, Theme};
use chatdeck::MemoryStore;

use super::common::fixtures::{deterministic_store, TestDatabase};

/// Appearance written in one session is read back by the next
#[test]
fn test_appearance_survives_restart() {
    let test_db = TestDatabase::new();

    {
        let mut store = deterministic_store(test_db.open());
        store.dispatch(Action::SetTheme(Theme::Dark));
        store.dispatch(Action::SetLanguage("fr".into()));
        store.dispatch(Action::UpdatePreferences(PreferencesPatch {
            font_size: Some(FontSize::Small),
            ..Default::default()
        }));
        // Non-persisted state
        store.dispatch(Action::UpdateGlobalSearch("hello".into()));
    }

    let store = deterministic_store(test_db.open());
    let state = store.snapshot();

    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.language, "fr");
    assert_eq!(state.preferences.font_size, FontSize::Small);
    assert!(state.search.history.is_empty());
}

#[test]
fn test_stored_theme_blocks_remote_sync() {
    let test_db = TestDatabase::new();
    let backend = test_db.open();
    backend.set("theme", "light").unwrap();

    let mut store = deterministic_store(backend);
    store.dispatch(Action::SyncThemeWithUserSettings(RemotePreferences {
        dark_mode: Some(true),
    }));

    assert_eq!(store.snapshot().theme, Theme::Light);
}

#[test]
fn test_remote_sync_is_not_persisted() {
    let backend = MemoryStore::new();
    let mut store = deterministic_store(Arc::new(backend.clone()));

    store.dispatch(Action::SyncThemeWithUserSettings(RemotePreferences {
        dark_mode: Some(true),
    }));

    assert_eq!(store.snapshot().theme, Theme::Dark);
    assert_eq!(backend.get("theme").unwrap(), None);
}

#[test]
fn test_malformed_stored_preferences_fall_back() {
    let backend = MemoryStore::with_entries([
        ("preferences", "[1, 2, 3]".to_string()),
        ("language", "de".to_string()),
    ]);

    let store = deterministic_store(Arc::new(backend));
    let state = store.snapshot();

    assert_eq!(state.preferences, Default::default());
    assert_eq!(state.language, "de");
}
