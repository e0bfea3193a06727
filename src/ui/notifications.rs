//! Notification center and toast records

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Most recent notifications kept; older ones are discarded
pub const NOTIFICATION_LIMIT: usize = 50;

/// Default toast display time
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub Uuid);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Message,
    Call,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub data: Value,
}

/// Caller-supplied notification fields; the store fills in id and timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationInput {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub data: Value,
    /// Overrides the `read = false` default
    pub read: Option<bool>,
    /// Overrides the creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

impl NotificationInput {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn into_notification(self, id: NotificationId, now: DateTime<Utc>) -> Notification {
        Notification {
            id,
            created_at: self.created_at.unwrap_or(now),
            read: self.read.unwrap_or(false),
            kind: self.kind,
            title: self.title,
            message: self.message,
            data: self.data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub created_at: DateTime<Utc>,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub auto_hide: bool,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastInput {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub auto_hide: Option<bool>,
    pub duration_ms: Option<u64>,
}

impl ToastInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn into_toast(self, id: ToastId, now: DateTime<Utc>) -> Toast {
        Toast {
            id,
            created_at: now,
            kind: self.kind,
            title: self.title,
            message: self.message,
            auto_hide: self.auto_hide.unwrap_or(true),
            duration_ms: self.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationState {
    /// Newest first, at most [`NOTIFICATION_LIMIT`] entries
    pub notifications: Vec<Notification>,
    /// Arrival order; removal is up to the caller
    pub toasts: Vec<Toast>,
}

impl NotificationState {
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        self.notifications.truncate(NOTIFICATION_LIMIT);
    }

    pub fn mark_read(&mut self, id: NotificationId) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn remove_notification(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn remove_toast(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }
}
