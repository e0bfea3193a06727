use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::util::paths::config_path;

use super::default_shortcuts::default_shortcuts;
use super::shortcuts::ShortcutMap;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Environment variable consulted when the theme setting is `system`
pub const COLOR_SCHEME_ENV: &str = "CHATDECK_COLOR_SCHEME";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Theme used until the user picks one in the app
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSetting {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeSetting {
    /// Whether this setting resolves to a dark colour scheme
    pub fn prefers_dark(&self) -> bool {
        match self {
            ThemeSetting::Light => false,
            ThemeSetting::Dark => true,
            ThemeSetting::System => std::env::var(COLOR_SCHEME_ENV)
                .map(|v| v.trim().eq_ignore_ascii_case("dark"))
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme fallback when nothing is persisted
    pub theme: ThemeSetting,
    /// Language fallback when nothing is persisted (None = derive from $LANG)
    pub language: Option<String>,
    /// Initial viewport width
    pub viewport_width: u32,
    /// Initial viewport height
    pub viewport_height: u32,
    /// Where theme/language/preferences are persisted
    pub storage: StorageBackend,
    /// Quiet period for search-as-you-type
    pub search_debounce: Duration,
    /// Default shortcuts with user overrides merged on top
    pub shortcuts: ShortcutMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::System,
            language: None,
            viewport_width: 1280,
            viewport_height: 800,
            storage: StorageBackend::Sqlite,
            search_debounce: Duration::from_millis(300),
            shortcuts: default_shortcuts(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlAppearanceConfig {
    pub theme: Option<ThemeSetting>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlViewportConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub backend: Option<StorageBackend>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSearchConfig {
    pub debounce_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub appearance: Option<TomlAppearanceConfig>,
    pub viewport: Option<TomlViewportConfig>,
    pub storage: Option<TomlStorageConfig>,
    pub search: Option<TomlSearchConfig>,
    /// Shortcut -> action-name overrides
    pub shortcuts: Option<HashMap<String, String>>,
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// Writes the bundled example on first run. A file that cannot be read or
    /// parsed is logged and ignored.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Ignoring unreadable config file"
                );
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file (missing file = defaults)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML contents and merge them onto the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();
        config.apply(toml_config);
        Ok(config)
    }

    fn apply(&mut self, toml_config: TomlConfig) {
        if let Some(appearance) = toml_config.appearance {
            if let Some(theme) = appearance.theme {
                self.theme = theme;
            }
            if let Some(language) = appearance.language {
                self.language = Some(language);
            }
        }

        if let Some(viewport) = toml_config.viewport {
            if let Some(width) = viewport.width {
                self.viewport_width = width;
            }
            if let Some(height) = viewport.height {
                self.viewport_height = height;
            }
        }

        if let Some(storage) = toml_config.storage {
            if let Some(backend) = storage.backend {
                self.storage = backend;
            }
        }

        if let Some(search) = toml_config.search {
            if let Some(ms) = search.debounce_ms {
                self.search_debounce = Duration::from_millis(ms);
            }
        }

        // Merge user shortcuts on top of defaults
        if let Some(shortcuts) = toml_config.shortcuts {
            self.shortcuts.merge(shortcuts);
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Language fallback: configured value, else the primary subtag of $LANG, else "en"
    pub fn fallback_language(&self) -> String {
        if let Some(language) = self.language.as_deref().filter(|l| !l.trim().is_empty()) {
            return language.trim().to_string();
        }
        std::env::var("LANG")
            .ok()
            .and_then(|lang| language_from_locale(&lang))
            .unwrap_or_else(|| "en".to_string())
    }
}

/// Extract a language code from a POSIX locale (`de_DE.UTF-8` -> `de`)
pub fn language_from_locale(locale: &str) -> Option<String> {
    let primary = locale
        .split(['_', '-', '.', '@'])
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    match primary {
        "C" | "POSIX" => None,
        code => Some(code.to_ascii_lowercase()),
    }
}
