//! Placed photographs.
//!
//! A [`Layer`] owns its image handle and keeps its sizing policy, crop
//! rectangle, and display size consistent. Those derived fields are only
//! written together, through [`LayerStack`](crate::LayerStack) operations.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::error::EditorError;
use crate::geometry::{CropRect, Frame, GeometryEngine, Rect, Size};
use crate::policy::{PrintMode, Sizing};
use crate::scale::DisplaySize;

/// Stable layer identity, unique within a [`LayerStack`](crate::LayerStack).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// A decoded photo ready to be placed, as handed over by the upload
/// pipeline.
///
/// `H` is whatever the pipeline needs released when the layer goes away:
/// decoded pixels, a thumbnail, a blob token.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerRequest<H> {
    name: String,
    image: H,
    size: Size,
}

impl<H> LayerRequest<H> {
    /// Validate the natural image size. Both sides must be non-zero; every
    /// geometry computation downstream relies on it.
    pub fn new(
        name: impl Into<String>,
        image: H,
        width: u32,
        height: u32,
    ) -> Result<Self, EditorError> {
        if width == 0 || height == 0 {
            return Err(EditorError::ZeroImageDimension { width, height });
        }
        let mut name = name.into();
        if name.is_empty() {
            name.push_str("Untitled");
        }
        Ok(Self {
            name,
            image,
            size: Size::new(width, height),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Partial update for placement, naming, and flags.
///
/// Geometry is deliberately absent; it changes only through the print
/// policy operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerPatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}

impl LayerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Move the layer origin (end of a drag).
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Rotation in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }
}

/// One photograph placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer<H> {
    id: LayerId,
    name: String,
    image: H,
    source: Size,
    x: f64,
    y: f64,
    rotation: f64,
    sizing: Sizing,
    crop: CropRect,
    display: DisplaySize,
    z_index: usize,
    visible: bool,
    locked: bool,
}

impl<H> Layer<H> {
    pub(crate) fn from_request(
        id: LayerId,
        request: LayerRequest<H>,
        origin: (f64, f64),
        z_index: usize,
        engine: &GeometryEngine,
    ) -> Self {
        let sizing = Sizing::initial(request.size);
        let Frame { crop, display } = engine.frame(request.size, &sizing);
        Self {
            id,
            name: request.name,
            image: request.image,
            source: request.size,
            x: origin.0,
            y: origin.1,
            rotation: 0.0,
            sizing,
            crop,
            display,
            z_index,
            visible: true,
            locked: false,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The image handle owned by this layer.
    pub fn image(&self) -> &H {
        &self.image
    }

    /// Natural pixel dimensions of the image.
    pub fn source_size(&self) -> Size {
        self.source
    }

    pub fn original_width(&self) -> u32 {
        self.source.width
    }

    pub fn original_height(&self) -> u32 {
        self.source.height
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }

    /// Normalized crop rectangle.
    pub fn crop(&self) -> CropRect {
        self.crop
    }

    /// Crop rectangle in source pixels, for renderers.
    pub fn crop_pixels(&self) -> Rect {
        self.crop.resolve(self.source.width, self.source.height)
    }

    /// On-canvas footprint in canvas pixels.
    pub fn display_size(&self) -> DisplaySize {
        self.display
    }

    /// Stacking rank; 0 draws first.
    pub fn z_index(&self) -> usize {
        self.z_index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the layer may be dragged or rotated.
    pub fn is_transformable(&self) -> bool {
        self.visible && !self.locked
    }

    /// Short print badge: `"10 x 15 L"`, `"9 x 13 P • O"`, or the rounded
    /// footprint (`"200×150"`) for free-size layers.
    pub fn label(&self) -> String {
        let Some(size) = self.sizing.print_size() else {
            return format!("{:.0}×{:.0}", self.display.width, self.display.height);
        };
        let orientation = match self.sizing.orientation() {
            Some(o) if o.is_landscape() => "L",
            _ => "P",
        };
        let mode = match self.sizing.mode() {
            Some(PrintMode::Original) => " • O",
            _ => "",
        };
        format!("{} {orientation}{mode}", size.name.replace('×', "x"))
    }

    /// Write a new policy and the geometry it implies.
    pub(crate) fn apply_sizing(&mut self, sizing: Sizing, engine: &GeometryEngine) {
        let Frame { crop, display } = engine.frame(self.source, &sizing);
        self.sizing = sizing;
        self.crop = crop;
        self.display = display;
    }

    /// Replace the crop of a classic layer. Other policies always show the
    /// full image; returns `false` and leaves them untouched.
    pub(crate) fn apply_crop(&mut self, crop: CropRect) -> bool {
        if !matches!(self.sizing, Sizing::Classic { .. }) {
            return false;
        }
        self.crop = crop.clamped();
        true
    }

    pub(crate) fn apply_patch(&mut self, patch: LayerPatch) {
        let LayerPatch {
            name,
            x,
            y,
            rotation,
            visible,
            locked,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(rotation) = rotation {
            self.rotation = rotation;
        }
        if let Some(visible) = visible {
            self.visible = visible;
        }
        if let Some(locked) = locked {
            self.locked = locked;
        }
    }

    pub(crate) fn set_z_index(&mut self, z_index: usize) {
        self.z_index = z_index;
    }

    /// Give up the image handle; the layer is gone after this.
    pub(crate) fn into_image(self) -> H {
        self.image
    }
}
