//! Keyboard shortcut notation and the shortcut -> action-name table
//!
//! Shortcuts are written the way web clients spell them (`ctrl+shift+a`,
//! `escape`, `ctrl+,`). Keys in a [`ShortcutMap`] are stored in canonical
//! form so `Ctrl+K` and `ctrl+k` name the same binding.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parsed shortcut (modifiers + key name)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Lower-cased key name (`k`, `escape`, `,`)
    pub key: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("empty shortcut notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("more than one key in shortcut: {0}")]
    MultipleKeys(String),
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.shift {
            parts.push("shift");
        }
        if self.meta {
            parts.push("meta");
        }
        parts.push(&self.key);
        write!(f, "{}", parts.join("+"))
    }
}

/// Normalize key aliases to one spelling
fn canonical_key_name(key: &str) -> String {
    match key {
        "esc" => "escape".to_string(),
        "return" => "enter".to_string(),
        "del" => "delete".to_string(),
        "spacebar" => "space".to_string(),
        other => other.to_string(),
    }
}

/// Parse notation like `ctrl+shift+a`, `Cmd+K`, `escape`, `ctrl++`
pub fn parse_shortcut(s: &str) -> Result<Shortcut, ShortcutParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ShortcutParseError::Empty);
    }

    let lowered = s.to_lowercase();

    // A trailing "++" means the key itself is "+"
    let (body, plus_key) = match lowered.strip_suffix("++") {
        Some(rest) => (rest.to_string(), true),
        None if lowered == "+" => (String::new(), true),
        None => (lowered, false),
    };

    let mut shortcut = Shortcut {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
        key: String::new(),
    };
    let mut key: Option<String> = plus_key.then(|| "+".to_string());

    for part in body.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => shortcut.ctrl = true,
            "alt" | "option" | "opt" => shortcut.alt = true,
            "shift" => shortcut.shift = true,
            "meta" | "cmd" | "command" | "super" | "win" => shortcut.meta = true,
            other => {
                if key.is_some() {
                    return Err(ShortcutParseError::MultipleKeys(s.to_string()));
                }
                key = Some(canonical_key_name(other));
            }
        }
    }

    shortcut.key = key.ok_or(ShortcutParseError::NoKey)?;
    Ok(shortcut)
}

impl FromStr for Shortcut {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shortcut(s)
    }
}

/// Canonical spelling of a shortcut string; unparseable input is kept verbatim
pub fn canonical_shortcut(s: &str) -> String {
    match parse_shortcut(s) {
        Ok(shortcut) => shortcut.to_string(),
        Err(_) => s.to_string(),
    }
}

/// Shortcut -> action-name bindings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutMap {
    bindings: BTreeMap<String, String>,
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or override one binding
    pub fn bind(&mut self, shortcut: &str, action: impl Into<String>) {
        self.bindings
            .insert(canonical_shortcut(shortcut), action.into());
    }

    /// Look up the action bound to a shortcut in any spelling
    pub fn resolve(&self, shortcut: &str) -> Option<&str> {
        self.bindings
            .get(&canonical_shortcut(shortcut))
            .map(String::as_str)
    }

    /// Merge bindings on top of the existing ones (existing keys are overridden,
    /// others are kept)
    pub fn merge<I, K, V>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (shortcut, action) in other {
            self.bind(shortcut.as_ref(), action);
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ShortcutMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ShortcutMap::new();
        map.merge(iter);
        map
    }
}
