//! Everything a transition may consult besides the state and its payload

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::data::{KeyValueStore, StorageKey};
use crate::ui::state::SessionDefaults;

/// Source of creation timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of record ids; every id handed out within a session is distinct
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Time-ordered random ids (UUIDv7)
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Monotonic counter ids, reproducible across runs
#[derive(Debug)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Uuid::from_u128(u128::from(n))
    }
}

/// Read-only view of the environment handed to [`UiState::apply`](crate::ui::UiState::apply)
pub struct TransitionContext<'a> {
    pub clock: &'a dyn Clock,
    pub ids: &'a dyn IdSource,
    pub defaults: &'a SessionDefaults,
    pub storage: &'a dyn KeyValueStore,
}

impl TransitionContext<'_> {
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn next_id(&self) -> Uuid {
        self.ids.next_id()
    }

    /// Whether the backend already holds a value for `key`.
    ///
    /// A backend that cannot be read counts as holding nothing.
    pub fn is_persisted(&self, key: StorageKey) -> bool {
        match self.storage.contains(key.as_str()) {
            Ok(present) => present,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to check persisted key");
                false
            }
        }
    }
}
