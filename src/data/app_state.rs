//! App state data access object (key-value store)

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::migrations;
use super::storage::{KeyValueStore, StorageError};

/// SQLite-backed key-value store over the `app_state` table
#[derive(Clone)]
pub struct AppStateStore {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl AppStateStore {
    /// Open (or create) the state database at `path`, bringing its schema up
    /// to date
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StorageError::CreateDir)?;
        }

        let mut conn = Connection::open(&path)?;
        migrations::run_migrations(&mut conn)?;
        tracing::debug!(path = %path.display(), "Opened state database");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for AppStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStateStore")
            .field("path", &self.path)
            .finish()
    }
}

impl KeyValueStore for AppStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT value FROM app_state WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
        Ok(())
    }
}
