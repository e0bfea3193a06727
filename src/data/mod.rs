//! Data persistence layer for chatdeck
//!
//! The UI store persists a handful of appearance settings through the
//! [`KeyValueStore`] port. `AppStateStore` keeps them in SQLite; `MemoryStore`
//! is used for ephemeral sessions and tests.

mod app_state;
mod memory;
mod migrations;
mod storage;

pub use app_state::AppStateStore;
pub use memory::MemoryStore;
pub use storage::{KeyValueStore, StorageError, StorageKey};
