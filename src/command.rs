//! Editor intents as values.
//!
//! UI events (menu picks, key presses, wheel notches) become [`Command`]s
//! and are applied with [`EditorState::apply`](crate::EditorState::apply).

use crate::catalog::PrintSize;
use crate::geometry::CropRect;
use crate::layer::{LayerId, LayerPatch, LayerRequest};
use crate::policy::{FixedSide, PrintMode, Sizing};
use crate::stack::Direction;
use crate::viewport::Point;

/// A single editor mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<H> {
    /// Place a decoded photo on top of the stack.
    Add(LayerRequest<H>),
    /// Move, rotate, rename, hide, or lock a layer.
    Update { id: LayerId, patch: LayerPatch },
    /// Remove a layer, releasing its image.
    Remove(LayerId),
    Select(Option<LayerId>),
    ClearSelection,
    Reorder { id: LayerId, direction: Direction },
    MoveToFront(LayerId),
    MoveToBack(LayerId),
    /// `None` switches to free size.
    SetPrintSize {
        id: LayerId,
        size: Option<PrintSize>,
    },
    SetPrintMode {
        id: LayerId,
        mode: PrintMode,
        fixed_side: FixedSide,
    },
    ToggleOrientation(LayerId),
    SetCrop { id: LayerId, crop: CropRect },
    SetSizing { id: LayerId, sizing: Sizing },
    SetZoom(f64),
    SetPan { x: f64, y: f64 },
    /// One wheel notch at `pointer` (screen space).
    ZoomAt { pointer: Point, delta: f64 },
}

impl<H> Command<H> {
    /// The layer this command addresses, if any.
    pub fn target(&self) -> Option<LayerId> {
        match *self {
            Self::Update { id, .. }
            | Self::Remove(id)
            | Self::Reorder { id, .. }
            | Self::MoveToFront(id)
            | Self::MoveToBack(id)
            | Self::SetPrintSize { id, .. }
            | Self::SetPrintMode { id, .. }
            | Self::ToggleOrientation(id)
            | Self::SetCrop { id, .. }
            | Self::SetSizing { id, .. } => Some(id),
            Self::Select(id) => id,
            Self::Add(_)
            | Self::ClearSelection
            | Self::SetZoom(_)
            | Self::SetPan { .. }
            | Self::ZoomAt { .. } => None,
        }
    }
}

/// Keyboard shortcuts acting on the selected layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Bring to front.
    Home,
    /// Send to back.
    End,
    /// One step up.
    PageUp,
    /// One step down.
    PageDown,
    Delete,
    Backspace,
}

impl Shortcut {
    /// Match a DOM-style key name (`"Home"`, `"PageUp"`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Delete" => Self::Delete,
            "Backspace" => Self::Backspace,
            _ => return None,
        })
    }

    /// Command for this key, or `None` when nothing is selected.
    pub fn command<H>(self, selected: Option<LayerId>) -> Option<Command<H>> {
        let id = selected?;
        Some(match self {
            Self::Home => Command::MoveToFront(id),
            Self::End => Command::MoveToBack(id),
            Self::PageUp => Command::Reorder {
                id,
                direction: Direction::Up,
            },
            Self::PageDown => Command::Reorder {
                id,
                direction: Direction::Down,
            },
            Self::Delete | Self::Backspace => Command::Remove(id),
        })
    }
}
