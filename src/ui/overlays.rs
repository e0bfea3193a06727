//! Transient overlay descriptors: confirm dialog, context menu, drag,
//! resize and the in-app clipboard.
//!
//! Each descriptor is replaced or reset as a whole so its flag and its
//! payload never disagree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque reference to a callback owned by the view layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackHandle(pub String);

impl CallbackHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// What the caller supplies when showing a confirm dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmDialogRequest {
    pub title: String,
    pub message: String,
    pub on_confirm: Option<CallbackHandle>,
    pub on_cancel: Option<CallbackHandle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmDialog {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub on_confirm: Option<CallbackHandle>,
    pub on_cancel: Option<CallbackHandle>,
}

impl ConfirmDialog {
    /// Canonical closed descriptor
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn shown(request: ConfirmDialogRequest) -> Self {
        Self {
            open: true,
            title: request.title,
            message: request.message,
            on_confirm: request.on_confirm,
            on_cancel: request.on_cancel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuItem {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub action: Option<CallbackHandle>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextMenu {
    pub open: bool,
    pub x: f64,
    pub y: f64,
    pub items: Vec<ContextMenuItem>,
}

impl ContextMenu {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn at(x: f64, y: f64, items: Vec<ContextMenuItem>) -> Self {
        Self {
            open: true,
            x,
            y,
            items,
        }
    }
}

/// An in-progress drag (absent when nothing is being dragged)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

/// An in-progress resize (absent when nothing is being resized)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeState {
    #[serde(rename = "type")]
    pub kind: String,
}

/// In-app clipboard contents (absent when empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    pub confirm_dialog: ConfirmDialog,
    pub context_menu: ContextMenu,
    pub drag: Option<DragState>,
    pub resize: Option<ResizeState>,
}

impl OverlayState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }
}
