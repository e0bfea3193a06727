//! Viewport size, responsive breakpoints and environment signals

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Widths below this are mobile
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Widths at or above this are desktop
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn for_width(width: u32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Dimensions reported by the host window; a missing one keeps its current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Viewport dimensions; the breakpoint is derived on every resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    breakpoint: Breakpoint,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            breakpoint: Breakpoint::for_width(width),
        }
    }

    /// Apply a resize report, keeping whichever dimension it leaves out
    pub fn resized(&self, size: ViewportSize) -> Self {
        Viewport::new(
            size.width.unwrap_or(self.width),
            size.height.unwrap_or(self.height),
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn is_mobile(&self) -> bool {
        self.breakpoint == Breakpoint::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.breakpoint == Breakpoint::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.breakpoint == Breakpoint::Desktop
    }
}

// Snapshots carry the derived flags so renderers never re-derive them
impl Serialize for Viewport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Viewport", 6)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("breakpoint", &self.breakpoint)?;
        state.serialize_field("is_mobile", &self.is_mobile())?;
        state.serialize_field("is_tablet", &self.is_tablet())?;
        state.serialize_field("is_desktop", &self.is_desktop())?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentStatus {
    pub online: bool,
    pub focused: bool,
    pub visibility: Visibility,
}

impl Default for EnvironmentStatus {
    fn default() -> Self {
        Self {
            online: true,
            focused: true,
            visibility: Visibility::Visible,
        }
    }
}
