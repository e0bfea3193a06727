//! Integration tests for a full session driven through the store

use std::sync::Arc;

use chatdeck::ui::layout::{ActiveTab, Panel};
use chatdeck::ui::notifications::{NotificationInput, NOTIFICATION_LIMIT};
use chatdeck::ui::{Action, Theme, ViewportSize};
use chatdeck::MemoryStore;
use serde_json::json;
use uuid::Uuid;

use super::common::determinism::test_now;
use super::common::fixtures::deterministic_store;

/// A realistic session: notifications, a tab switch, a phone-sized window
#[test]
fn test_session_flow() {
    let mut store = deterministic_store(Arc::new(MemoryStore::new()));

    store.dispatch(Action::AddNotification(NotificationInput::new(
        "New message",
        "Ada: lunch?",
    )));
    store.dispatch(Action::SetActiveTab(ActiveTab::Contacts));
    store.dispatch(Action::SetPanelOpen {
        panel: Panel::Contacts,
        open: true,
    });
    store.dispatch(Action::UpdateViewportSize(ViewportSize::new(500, 900)));

    let state = store.snapshot();
    let notification = &state.notifications.notifications[0];
    assert_eq!(notification.id.0, Uuid::from_u128(1));
    assert_eq!(notification.created_at, test_now());

    assert_eq!(state.layout.active_tab, ActiveTab::Contacts);
    assert!(state.viewport.is_mobile());
    assert!(state.layout.sidebar_collapsed);
    assert!(state.layout.chat_panel_open);
    assert!(!state.layout.contacts_panel_open);
}

#[test]
fn test_notification_cap_through_store() {
    let mut store = deterministic_store(Arc::new(MemoryStore::new()));
    for i in 0..(NOTIFICATION_LIMIT + 10) {
        store.dispatch(Action::AddNotification(NotificationInput::new(
            format!("n{i}"),
            "",
        )));
    }

    let state = store.snapshot();
    let list = &state.notifications.notifications;
    assert_eq!(list.len(), NOTIFICATION_LIMIT);
    assert_eq!(list[0].title, "n59");
    assert_eq!(list[NOTIFICATION_LIMIT - 1].title, "n10");
}

#[test]
fn test_actions_from_json_lines() {
    let mut store = deterministic_store(Arc::new(MemoryStore::new()));
    let lines = [
        json!({"type": "set_theme", "payload": "dark"}),
        json!({"type": "update_global_search", "payload": "ada"}),
        json!({"type": "save_scroll_position", "payload": {"component": "chat-9", "position": 42.0}}),
        json!({"type": "open_modal", "payload": {"modal": "new-group"}}),
    ];
    for line in lines {
        let action: Action = serde_json::from_value(line).unwrap();
        store.dispatch(action);
    }

    let state = store.snapshot();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.search.history, vec!["ada"]);
    assert_eq!(store.get_scroll_position("chat-9"), 42.0);
    assert_eq!(
        state.layout.active_modal.as_ref().map(|m| m.modal.as_str()),
        Some("new-group")
    );
}

#[test]
fn test_reset_through_store() {
    let mut store = deterministic_store(Arc::new(MemoryStore::new()));
    store.dispatch(Action::ToggleTheme);
    store.dispatch(Action::AddNotification(NotificationInput::new("x", "")));
    store.dispatch(Action::SetGlobalLoading(true));
    store.dispatch(Action::ResetUiState);

    let state = store.snapshot();
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.notifications.notifications.is_empty());
    assert!(!state.status.global_loading);
    assert_eq!(store.resolve_shortcut("Ctrl+K"), Some("search"));
}

#[tokio::test]
async fn test_subscriber_wakes_on_dispatch() {
    let mut store = deterministic_store(Arc::new(MemoryStore::new()));
    let mut rx = store.subscribe();

    let waiter = tokio::spawn(async move {
        rx.changed().await.unwrap();
        let online = rx.borrow().environment.online;
        online
    });

    store.dispatch(Action::SetOnlineStatus(false));

    assert!(!waiter.await.unwrap());
}

/// Search-as-you-type: only the last query of a burst reaches the store
#[tokio::test(start_paused = true)]
async fn test_debounced_search_dispatch() {
    use std::time::Duration;

    use chatdeck::{Config, Debouncer};
    use parking_lot::Mutex;

    let config = Config::default();
    let store = Arc::new(Mutex::new(deterministic_store(Arc::new(MemoryStore::new()))));
    let mut debouncer = Debouncer::new(config.search_debounce);

    for query in ["a", "ad", "ada"] {
        let store = Arc::clone(&store);
        let query = query.to_string();
        debouncer.schedule(async move {
            store.lock().dispatch(Action::UpdateGlobalSearch(query));
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    tokio::time::sleep(config.search_debounce * 2).await;

    let state = store.lock().snapshot();
    assert_eq!(state.search.global_query, "ada");
    assert_eq!(state.search.history, vec!["ada"]);
    assert!(!debouncer.is_pending());
}
