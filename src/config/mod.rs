pub mod default_shortcuts;
pub mod shortcuts;
mod settings;

pub use default_shortcuts::default_shortcuts;
pub use settings::{
    language_from_locale, Config, ConfigError, StorageBackend, ThemeSetting, COLOR_SCHEME_ENV,
    EXAMPLE_CONFIG,
};
pub use shortcuts::{canonical_shortcut, parse_shortcut, Shortcut, ShortcutMap, ShortcutParseError};
