//! Editor state: layer stack plus viewport.
//!
//! ```
//! use zenprint::{Command, EditorState, LayerRequest, Point, Shortcut};
//!
//! let editor = EditorState::new()
//!     .apply(Command::Add(LayerRequest::new("a.jpg", "blob:a", 4000, 3000).unwrap()), |_| {})
//!     .apply(Command::ZoomAt { pointer: Point::new(200.0, 100.0), delta: -1.0 }, |_| {});
//! assert_eq!(editor.layers().len(), 1);
//!
//! let mut released = Vec::new();
//! let delete = Shortcut::Delete.command(editor.selected()).unwrap();
//! let editor = editor.apply(delete, |h| released.push(h));
//! assert_eq!(released, ["blob:a"]);
//! assert!(editor.layers().is_empty());
//! ```

use crate::command::Command;
use crate::config::CanvasConfig;
use crate::error::EditorError;
use crate::layer::{Layer, LayerId};
use crate::stack::LayerStack;
use crate::viewport::{GridSpacing, Point, Viewport};

/// Everything a renderer needs: layers in draw order, the selection, and
/// the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState<H> {
    stack: LayerStack<H>,
    viewport: Viewport,
    config: CanvasConfig,
}

impl<H> Default for EditorState<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> EditorState<H> {
    /// Empty editor with the default configuration.
    pub fn new() -> Self {
        Self {
            stack: LayerStack::new(),
            viewport: Viewport::IDENTITY,
            config: CanvasConfig::default(),
        }
    }

    /// Empty editor with a validated configuration.
    pub fn with_config(config: CanvasConfig) -> Result<Self, EditorError> {
        Ok(Self {
            stack: LayerStack::with_config(&config)?,
            viewport: Viewport::IDENTITY,
            config,
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn stack(&self) -> &LayerStack<H> {
        &self.stack
    }

    /// Layers bottom to top.
    pub fn layers(&self) -> &[Layer<H>] {
        self.stack.layers()
    }

    pub fn selected(&self) -> Option<LayerId> {
        self.stack.selected()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn grid_spacing(&self) -> GridSpacing {
        self.viewport.grid_spacing(self.config.scale())
    }

    /// Run a stack operation.
    pub fn map_stack(self, f: impl FnOnce(LayerStack<H>) -> LayerStack<H>) -> Self {
        Self {
            stack: f(self.stack),
            ..self
        }
    }

    /// Run a viewport operation.
    pub fn map_viewport(self, f: impl FnOnce(Viewport) -> Viewport) -> Self {
        Self {
            viewport: f(self.viewport),
            ..self
        }
    }

    /// Zoom one wheel notch around `pointer` with the configured step.
    pub fn zoom_at(self, pointer: Point, delta: f64) -> Self {
        let step = self.config.zoom_step;
        self.map_viewport(|v| v.zoom_at_with_step(pointer, delta, step))
    }

    /// Apply one command. `release` receives the image handle of a removed
    /// layer and is not called for any other command.
    pub fn apply(self, command: Command<H>, release: impl FnOnce(H)) -> Self {
        match command {
            Command::Add(request) => self.map_stack(|s| s.add(request)),
            Command::Update { id, patch } => self.map_stack(|s| s.update(id, patch)),
            Command::Remove(id) => self.map_stack(|s| s.remove(id, release)),
            Command::Select(id) => self.map_stack(|s| s.select(id)),
            Command::ClearSelection => self.map_stack(LayerStack::clear_selection),
            Command::Reorder { id, direction } => self.map_stack(|s| s.reorder(id, direction)),
            Command::MoveToFront(id) => self.map_stack(|s| s.move_to_front(id)),
            Command::MoveToBack(id) => self.map_stack(|s| s.move_to_back(id)),
            Command::SetPrintSize { id, size } => self.map_stack(|s| s.set_print_size(id, size)),
            Command::SetPrintMode {
                id,
                mode,
                fixed_side,
            } => self.map_stack(|s| s.set_print_mode(id, mode, fixed_side)),
            Command::ToggleOrientation(id) => self.map_stack(|s| s.toggle_orientation(id)),
            Command::SetCrop { id, crop } => self.map_stack(|s| s.set_crop(id, crop)),
            Command::SetSizing { id, sizing } => self.map_stack(|s| s.set_sizing(id, sizing)),
            Command::SetZoom(zoom) => self.map_viewport(|v| v.set_zoom(zoom)),
            Command::SetPan { x, y } => self.map_viewport(|v| v.set_pan(x, y)),
            Command::ZoomAt { pointer, delta } => self.zoom_at(pointer, delta),
        }
    }
}
