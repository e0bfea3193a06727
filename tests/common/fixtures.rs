//! Store fixtures

use std::path::PathBuf;
use std::sync::Arc;

use chatdeck::{AppStateStore, KeyValueStore, SessionDefaults, UiStore};
use tempfile::TempDir;

use super::determinism::{DeterministicUuidGenerator, TestClock};

/// Build a store with a pinned clock and sequential ids
pub fn deterministic_store(storage: Arc<dyn KeyValueStore>) -> UiStore {
    UiStore::with_sources(
        storage,
        SessionDefaults::default(),
        Arc::new(TestClock),
        Arc::new(DeterministicUuidGenerator::new()),
    )
}

/// A state database file in a temporary directory
pub struct TestDatabase {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDatabase {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("chatdeck.db");
        Self { _dir: dir, path }
    }

    /// Open the file, as a new session would
    pub fn open(&self) -> Arc<AppStateStore> {
        Arc::new(AppStateStore::open(&self.path).expect("Failed to open state database"))
    }
}
