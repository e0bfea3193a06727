//! Theme, language and display preferences

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme (there is no third state)
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageWidth {
    Narrow,
    #[default]
    Normal,
    Wide,
}

/// Display preferences, persisted JSON-encoded under the `preferences` key.
///
/// Every field has a serde default so partially stored records still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub sounds: bool,
    pub desktop_notifications: bool,
    pub message_previews: bool,
    pub enter_to_send: bool,
    pub show_timestamps: bool,
    pub compact_mode: bool,
    pub show_avatars: bool,
    pub animations: bool,
    pub auto_play_media: bool,
    pub link_previews: bool,
    pub typing_indicators: bool,
    pub read_receipts: bool,
    pub spell_check: bool,
    pub emoji_suggestions: bool,
    pub markdown: bool,
    pub auto_scroll: bool,
    pub ai_suggestions: bool,
    pub font_size: FontSize,
    pub time_format: TimeFormat,
    pub message_width: MessageWidth,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sounds: true,
            desktop_notifications: true,
            message_previews: true,
            enter_to_send: true,
            show_timestamps: true,
            compact_mode: false,
            show_avatars: true,
            animations: true,
            auto_play_media: false,
            link_previews: true,
            typing_indicators: true,
            read_receipts: true,
            spell_check: true,
            emoji_suggestions: true,
            markdown: true,
            auto_scroll: true,
            ai_suggestions: true,
            font_size: FontSize::Medium,
            time_format: TimeFormat::TwentyFourHour,
            message_width: MessageWidth::Normal,
        }
    }
}

/// Partial preferences update; only the supplied fields change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sounds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_previews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter_to_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_timestamps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_avatars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_previews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typing_indicators: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_receipts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<TimeFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_width: Option<MessageWidth>,
}

macro_rules! merge_fields {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

impl Preferences {
    /// Shallow merge: overwrite exactly the fields present in `patch`
    pub fn merge(&mut self, patch: PreferencesPatch) {
        merge_fields!(
            self,
            patch,
            sounds,
            desktop_notifications,
            message_previews,
            enter_to_send,
            show_timestamps,
            compact_mode,
            show_avatars,
            animations,
            auto_play_media,
            link_previews,
            typing_indicators,
            read_receipts,
            spell_check,
            emoji_suggestions,
            markdown,
            auto_scroll,
            ai_suggestions,
            font_size,
            time_format,
            message_width,
        );
    }

    /// Decode a stored record
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> String {
        // A struct of bools and unit enums always serializes
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Preferences fetched from the user's remote account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemotePreferences {
    pub dark_mode: Option<bool>,
}
