pub mod config;
pub mod data;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{AppStateStore, KeyValueStore, MemoryStore, StorageError, StorageKey};
pub use ui::{Action, SessionDefaults, UiState, UiStore};
pub use util::Debouncer;
