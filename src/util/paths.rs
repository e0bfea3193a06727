//! Files chatdeck keeps under its data directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Fix the data directory for this process (`~/.chatdeck` unless overridden).
///
/// The first call wins; later calls keep the existing directory.
pub fn init_data_dir(custom_path: Option<PathBuf>) -> &'static Path {
    let requested = custom_path.unwrap_or_else(default_data_dir);
    let dir = DATA_DIR.get_or_init(|| requested.clone());
    if *dir != requested {
        tracing::debug!(
            requested = %requested.display(),
            current = %dir.display(),
            "Data directory already initialized"
        );
    }
    dir
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".chatdeck"))
        .unwrap_or_else(|| PathBuf::from(".chatdeck"))
}

fn in_data_dir(relative: &str) -> PathBuf {
    match DATA_DIR.get() {
        Some(dir) => dir.join(relative),
        None => default_data_dir().join(relative),
    }
}

/// SQLite file holding persisted appearance settings
pub fn database_path() -> PathBuf {
    in_data_dir("chatdeck.db")
}

pub fn log_file_path() -> PathBuf {
    in_data_dir("logs/chatdeck.log")
}

pub fn config_path() -> PathBuf {
    in_data_dir("config.toml")
}
