//! Default keyboard shortcuts
//!
//! Seeded into every new session; user updates merge on top.

use super::shortcuts::ShortcutMap;

/// Create the default shortcut table
pub fn default_shortcuts() -> ShortcutMap {
    let mut map = ShortcutMap::new();

    map.bind("ctrl+k", "search");
    map.bind("ctrl+n", "new-chat");
    map.bind("ctrl+shift+a", "new-ai-chat");
    map.bind("escape", "close-modal");
    map.bind("ctrl+,", "settings");
    map.bind("ctrl+/", "shortcuts-help");

    map
}
