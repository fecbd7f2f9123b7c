//! Ordered layer collection with single selection.
//!
//! Layers are stored in draw order and each carries its position as
//! `z_index`, so the indices are always exactly `0..len`. Every operation
//! consumes the current stack and returns the next one; an operation
//! addressing an unknown id returns the stack unchanged.
//!
//! ```
//! use zenprint::{Direction, LayerRequest, LayerStack};
//!
//! let stack = LayerStack::new()
//!     .add(LayerRequest::new("a.jpg", 1u32, 4000, 3000).unwrap())
//!     .add(LayerRequest::new("b.jpg", 2u32, 3000, 4000).unwrap());
//! let b = stack.selected().unwrap();
//!
//! let stack = stack.move_to_back(b);
//! assert_eq!(stack.get(b).unwrap().z_index(), 0);
//!
//! let mut released = Vec::new();
//! let stack = stack.remove(b, |handle| released.push(handle));
//! assert_eq!(released, [2]);
//! assert_eq!(stack.len(), 1);
//! assert_eq!(stack.selected(), None);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::debug;

use crate::catalog::PrintSize;
use crate::config::{CanvasConfig, ImportGrid};
use crate::error::EditorError;
use crate::geometry::{CropRect, GeometryEngine};
use crate::layer::{Layer, LayerId, LayerPatch, LayerRequest};
use crate::policy::{FixedSide, PrintMode, Sizing};

/// Single-step restacking direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top (higher `z_index`).
    Up,
    /// Toward the bottom (lower `z_index`).
    Down,
}

/// The layer collection, its selection, and the geometry used to keep
/// every layer consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack<H> {
    /// Draw order; `layers[i].z_index() == i`.
    layers: Vec<Layer<H>>,
    selected: Option<LayerId>,
    next_id: u64,
    engine: GeometryEngine,
    import_grid: ImportGrid,
}

impl<H> Default for LayerStack<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> LayerStack<H> {
    /// Empty stack with the default configuration.
    pub fn new() -> Self {
        Self::from_valid(&CanvasConfig::default())
    }

    /// Empty stack with a validated configuration.
    pub fn with_config(config: &CanvasConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &CanvasConfig) -> Self {
        Self {
            layers: Vec::new(),
            selected: None,
            next_id: 1,
            engine: GeometryEngine::from_valid(config),
            import_grid: config.import_grid,
        }
    }

    pub fn engine(&self) -> &GeometryEngine {
        &self.engine
    }

    /// Layers bottom to top.
    pub fn layers(&self) -> &[Layer<H>] {
        &self.layers
    }

    /// Visible layers bottom to top.
    pub fn visible_layers(&self) -> impl Iterator<Item = &Layer<H>> {
        self.layers.iter().filter(|l| l.is_visible())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer<H>> {
        self.layers.iter().find(|l| l.id() == id)
    }

    /// Topmost layer.
    pub fn top(&self) -> Option<&Layer<H>> {
        self.layers.last()
    }

    /// Currently selected id. May name a layer that no longer exists.
    pub fn selected(&self) -> Option<LayerId> {
        self.selected
    }

    pub fn selected_layer(&self) -> Option<&Layer<H>> {
        self.selected.and_then(|id| self.get(id))
    }

    /// The selected layer if it may be dragged or rotated: it must exist,
    /// be visible, and be unlocked. Any other selection is inert.
    pub fn transform_target(&self) -> Option<&Layer<H>> {
        self.selected_layer().filter(|l| l.is_transformable())
    }

    /// Id the next added layer will get.
    pub fn next_id(&self) -> LayerId {
        LayerId::new(self.next_id)
    }

    fn position(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    /// Rewrite every `z_index` from storage order.
    fn reindex(&mut self) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.set_z_index(i);
        }
    }

    /// Apply `f` to the layer with `id`, if any.
    fn with_layer(mut self, id: LayerId, f: impl FnOnce(&mut Layer<H>, &GeometryEngine)) -> Self {
        let engine = self.engine;
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id() == id) {
            f(layer, &engine);
        }
        self
    }

    /// Place a new photo on top of the stack and select it.
    ///
    /// The layer starts in classic mode at the default print size with
    /// orientation detected from the image, in the next import grid slot.
    pub fn add(mut self, request: LayerRequest<H>) -> Self {
        let id = LayerId::new(self.next_id);
        self.next_id += 1;
        let z_index = self.layers.len();
        let origin = self.import_grid.origin(z_index, self.engine.scale());
        let layer = Layer::from_request(id, request, origin, z_index, &self.engine);
        debug!(
            "add {id} '{}' ({}x{}) at z {z_index}",
            layer.name(),
            layer.original_width(),
            layer.original_height()
        );
        self.layers.push(layer);
        self.selected = Some(id);
        self
    }

    /// Merge placement, name, and flag changes.
    pub fn update(self, id: LayerId, patch: LayerPatch) -> Self {
        self.with_layer(id, |layer, _| layer.apply_patch(patch))
    }

    /// Remove a layer and hand its image handle to `release`.
    ///
    /// `release` runs exactly once if the layer exists and never otherwise.
    /// Remaining layers keep their relative order with indices compacted.
    pub fn remove(mut self, id: LayerId, release: impl FnOnce(H)) -> Self {
        let Some(index) = self.position(id) else {
            return self;
        };
        let layer = self.layers.remove(index);
        self.reindex();
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("remove {id} from z {index}, {} left", self.layers.len());
        release(layer.into_image());
        self
    }

    /// Swap with the neighbour above or below. No-op at the boundary.
    pub fn reorder(mut self, id: LayerId, direction: Direction) -> Self {
        let Some(index) = self.position(id) else {
            return self;
        };
        let target = match direction {
            Direction::Up => index + 1,
            Direction::Down => match index.checked_sub(1) {
                Some(i) => i,
                None => return self,
            },
        };
        if target >= self.layers.len() {
            return self;
        }
        self.layers.swap(index, target);
        self.layers[index].set_z_index(index);
        self.layers[target].set_z_index(target);
        debug!("reorder {id} {direction:?}: z {index} -> {target}");
        self
    }

    /// Move to the top in one step.
    pub fn move_to_front(mut self, id: LayerId) -> Self {
        let Some(index) = self.position(id) else {
            return self;
        };
        if index + 1 == self.layers.len() {
            return self;
        }
        let layer = self.layers.remove(index);
        self.layers.push(layer);
        self.reindex();
        debug!("move {id} to front from z {index}");
        self
    }

    /// Move to the bottom in one step.
    pub fn move_to_back(mut self, id: LayerId) -> Self {
        let Some(index) = self.position(id) else {
            return self;
        };
        if index == 0 {
            return self;
        }
        let layer = self.layers.remove(index);
        self.layers.insert(0, layer);
        self.reindex();
        debug!("move {id} to back from z {index}");
        self
    }

    /// Select `id`, or nothing. Unknown ids are accepted and stay inert.
    pub fn select(mut self, id: Option<LayerId>) -> Self {
        self.selected = id;
        self
    }

    pub fn clear_selection(self) -> Self {
        self.select(None)
    }

    /// Set or drop the print size. Mode and orientation carry over.
    pub fn set_print_size(self, id: LayerId, size: Option<PrintSize>) -> Self {
        self.with_layer(id, |layer, engine| {
            let sizing = layer.sizing().with_print_size(size, layer.source_size());
            debug!("{id}: print size -> {}", size.map_or("free", |s| s.id));
            layer.apply_sizing(sizing, engine);
        })
    }

    /// Switch between classic and original. Ignored for free-size layers.
    pub fn set_print_mode(self, id: LayerId, mode: PrintMode, fixed_side: FixedSide) -> Self {
        self.with_layer(id, |layer, engine| {
            if let Some(sizing) = layer.sizing().with_mode(mode, fixed_side) {
                debug!("{id}: mode -> {mode} ({fixed_side})");
                layer.apply_sizing(sizing, engine);
            }
        })
    }

    /// Flip portrait/landscape. Ignored for free-size layers and square sizes.
    pub fn toggle_orientation(self, id: LayerId) -> Self {
        self.with_layer(id, |layer, engine| {
            if let Some(sizing) = layer.sizing().toggle_orientation() {
                debug!("{id}: orientation -> {:?}", sizing.orientation());
                layer.apply_sizing(sizing, engine);
            }
        })
    }

    /// Replace size, orientation, mode, and fixed side at once.
    pub fn set_sizing(self, id: LayerId, sizing: Sizing) -> Self {
        self.with_layer(id, |layer, engine| {
            debug!("{id}: sizing -> {sizing:?}");
            layer.apply_sizing(sizing, engine);
        })
    }

    /// Reframe a classic layer. The rect is clamped to the image; layers in
    /// other modes always show the full image and are left unchanged.
    pub fn set_crop(self, id: LayerId, crop: CropRect) -> Self {
        self.with_layer(id, |layer, _| {
            if layer.apply_crop(crop) {
                debug!("{id}: crop -> {:?}", layer.crop());
            }
        })
    }
}
