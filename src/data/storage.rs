//! Persistence port for lightly-persisted UI settings
//!
//! The UI store only ever talks to a [`KeyValueStore`]; which backend sits
//! behind it (SQLite, memory) is decided at startup.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create data directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Keys the UI store reads at construction and writes on appearance changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKey {
    Theme,
    Language,
    /// JSON-encoded preferences record
    Preferences,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Theme => "theme",
            StorageKey::Language => "language",
            StorageKey::Preferences => "preferences",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value backend that survives process restarts
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a value (insert or update)
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Whether a key currently has a stored value
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
