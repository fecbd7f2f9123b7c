//! Crop rectangles and display sizes for each sizing policy.
//!
//! Pure geometry — no pixel operations, no allocations. Every function is
//! total for non-zero image dimensions; the zero check happens once, when a
//! [`LayerRequest`](crate::LayerRequest) is built.
//!
//! # Example
//!
//! ```
//! use zenprint::{GeometryEngine, Orientation, Size, catalog};
//!
//! let engine = GeometryEngine::default();
//! let size = catalog::lookup("10x15").unwrap();
//! let frame = engine.classic(Size::new(4000, 3000), &size, Orientation::Portrait);
//!
//! // 4:3 landscape photo cropped to a 2:3 portrait print, centered.
//! assert!((frame.crop.x - 0.25).abs() < 1e-9);
//! assert!((frame.crop.width - 0.5).abs() < 1e-9);
//! assert_eq!(frame.display.width, 120.0);
//! assert_eq!(frame.display.height, 180.0);
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

use log::trace;

use crate::catalog::PrintSize;
use crate::config::CanvasConfig;
use crate::error::EditorError;
use crate::orientation::Orientation;
use crate::policy::{FixedSide, Sizing};
use crate::scale::{CanvasScale, DisplaySize, cm_at_dpi};

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp this rect to fit within `(0, 0, max_w, max_h)`.
    /// Width and height are clamped to at least 1.
    pub fn clamp_to(self, max_w: u32, max_h: u32) -> Self {
        let x = self.x.min(max_w.saturating_sub(1));
        let y = self.y.min(max_h.saturating_sub(1));
        let w = self.width.min(max_w.saturating_sub(x)).max(1);
        let h = self.height.min(max_h.saturating_sub(y)).max(1);
        Self {
            x,
            y,
            width: w,
            height: h,
        }
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}

/// Region of the original image shown by a layer, as fractions of the
/// image dimensions.
///
/// Always satisfies `0 ≤ x`, `0 ≤ y`, `x + width ≤ 1`, `y + height ≤ 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// The whole image.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Whether the rect lies inside the unit square, allowing `eps` of
    /// floating-point slack on the far edges.
    pub fn is_within_bounds(&self, eps: f64) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.x + self.width <= 1.0 + eps
            && self.y + self.height <= 1.0 + eps
    }

    /// Pull the rect inside the unit square.
    ///
    /// Sizes are clamped to `(0, 1]` first, then the origin is clamped so
    /// the far edges stay inside. Non-finite components fall back to the
    /// full extent on that axis.
    pub fn clamped(self) -> Self {
        let (x, width) = clamp_axis(self.x, self.width);
        let (y, height) = clamp_axis(self.y, self.height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Resolve to pixel coordinates for an image of the given size.
    pub fn resolve(&self, source_w: u32, source_h: u32) -> Rect {
        let c = self.clamped();
        let px = (source_w as f64 * c.x).round() as u32;
        let py = (source_h as f64 * c.y).round() as u32;
        let pw = (source_w as f64 * c.width).round() as u32;
        let ph = (source_h as f64 * c.height).round() as u32;
        Rect {
            x: px,
            y: py,
            width: pw,
            height: ph,
        }
        .clamp_to(source_w, source_h)
    }
}

fn clamp_axis(origin: f64, extent: f64) -> (f64, f64) {
    if !(origin.is_finite() && extent.is_finite()) || extent <= 0.0 {
        return (0.0, 1.0);
    }
    let extent = extent.min(1.0);
    let origin = origin.clamp(0.0, 1.0 - extent);
    (origin, extent)
}

/// Computed geometry for one layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Part of the original image to show.
    pub crop: CropRect,
    /// On-canvas footprint.
    pub display: DisplaySize,
}

/// Centered crop of an `image_w`×`image_h` image to the aspect ratio of
/// `target_w`×`target_h`.
///
/// A relatively wider image keeps its full height and loses width; any
/// other image keeps its full width and loses height. Equal aspect ratios
/// take the second branch, which yields the full image.
pub fn centered_crop(image_w: f64, image_h: f64, target_w: f64, target_h: f64) -> CropRect {
    let image_aspect = image_w / image_h;
    let target_aspect = target_w / target_h;

    let (crop_w, crop_h) = if image_aspect > target_aspect {
        // Wider than target: full height, narrow width.
        (image_h * target_aspect, image_h)
    } else {
        // Taller than (or equal to) target: full width, narrow height.
        (image_w, image_w / target_aspect)
    };

    let x = (image_w - crop_w) / 2.0;
    let y = (image_h - crop_h) / 2.0;

    CropRect {
        x: x / image_w,
        y: y / image_h,
        width: crop_w / image_w,
        height: crop_h / image_h,
    }
}

/// Scale `width`×`height` down (never up) so the longer side is at most
/// `max`, preserving aspect ratio.
pub fn fit_within(width: u32, height: u32, max: f64) -> DisplaySize {
    let w = width as f64;
    let h = height as f64;
    let scale = (max / w).min(max / h).min(1.0);
    DisplaySize::new(w * scale, h * scale)
}

/// Integer variant of [`fit_within`] for decode targets, e.g. capping
/// imports at [`IMPORT_MAX_DIMENSION`](crate::config::IMPORT_MAX_DIMENSION).
///
/// Each side is rounded and kept at least 1, so a `max` of 0 behaves as 1.
pub fn downscale_within(width: u32, height: u32, max: u32) -> Size {
    let max = max.max(1);
    if width <= max && height <= max {
        return Size::new(width, height);
    }
    let d = fit_within(width, height, max as f64);
    Size::new(
        (d.width.round() as u32).clamp(1, max),
        (d.height.round() as u32).clamp(1, max),
    )
}

/// Computes a layer's [`Frame`] from its image size and [`Sizing`].
///
/// Display sizes use the on-screen scale; classic crop aspect ratios use
/// the print resolution. The two are independent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryEngine {
    scale: CanvasScale,
    crop_dpi: f64,
    preview_max: f64,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::from_valid(&CanvasConfig::default())
    }
}

impl GeometryEngine {
    /// Engine for `config`, rejecting values that would give empty or
    /// non-finite display sizes.
    pub fn new(config: &CanvasConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// `config` must already have passed [`CanvasConfig::validate`].
    pub(crate) fn from_valid(config: &CanvasConfig) -> Self {
        Self {
            scale: config.scale(),
            crop_dpi: config.crop_dpi,
            preview_max: config.preview_max,
        }
    }

    pub fn scale(&self) -> CanvasScale {
        self.scale
    }

    /// Dispatch on the sizing policy.
    pub fn frame(&self, image: Size, sizing: &Sizing) -> Frame {
        let frame = match *sizing {
            Sizing::Unconstrained => self.unconstrained(image),
            Sizing::Classic { size, orientation } => self.classic(image, &size, orientation),
            Sizing::Original {
                size,
                orientation,
                fixed_side,
            } => self.original(image, &size, orientation, fixed_side),
        };
        trace!(
            "frame {}x{} {:?}: crop {:?}, display {:?}",
            image.width, image.height, sizing, frame.crop, frame.display
        );
        frame
    }

    /// Crop to the print's aspect ratio; footprint is the print size.
    pub fn classic(&self, image: Size, size: &PrintSize, orientation: Orientation) -> Frame {
        let display = self
            .scale
            .canvas_dimensions(size.width_cm, size.height_cm, orientation);
        let (w_cm, h_cm) = size.dimensions_cm(orientation);
        let crop = centered_crop(
            image.width as f64,
            image.height as f64,
            cm_at_dpi(w_cm, self.crop_dpi),
            cm_at_dpi(h_cm, self.crop_dpi),
        );
        Frame { crop, display }
    }

    /// Pin `fixed_side` to the print size; derive the other side from the
    /// image's aspect ratio. No crop.
    pub fn original(
        &self,
        image: Size,
        size: &PrintSize,
        orientation: Orientation,
        fixed_side: FixedSide,
    ) -> Frame {
        let canvas = self
            .scale
            .canvas_dimensions(size.width_cm, size.height_cm, orientation);
        let aspect = image.aspect();
        let display = match fixed_side {
            FixedSide::Width => DisplaySize::new(canvas.width, canvas.width / aspect),
            FixedSide::Height => DisplaySize::new(canvas.height * aspect, canvas.height),
        };
        Frame {
            crop: CropRect::FULL,
            display,
        }
    }

    /// Natural aspect, capped preview, no crop.
    pub fn unconstrained(&self, image: Size) -> Frame {
        Frame {
            crop: CropRect::FULL,
            display: fit_within(image.width, image.height, self.preview_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CATALOG};

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    // ── centered_crop ───────────────────────────────────────────────────

    #[test]
    fn crop_wider_image_narrows_width() {
        // 4000×3000 into a 10:15 portrait target.
        let c = centered_crop(4000.0, 3000.0, 10.0, 15.0);
        assert!(close(c.x, 0.25));
        assert!(close(c.y, 0.0));
        assert!(close(c.width, 0.5));
        assert!(close(c.height, 1.0));
    }

    #[test]
    fn crop_taller_image_narrows_height() {
        // 4000×3000 into a 15:10 landscape target.
        let c = centered_crop(4000.0, 3000.0, 15.0, 10.0);
        assert!(close(c.x, 0.0));
        assert!(close(c.width, 1.0));
        assert!(close(c.height, (4000.0 / 1.5) / 3000.0));
        assert!((c.y - 0.0555).abs() < 1e-3);
    }

    #[test]
    fn crop_equal_aspect_is_full() {
        let c = centered_crop(3000.0, 2000.0, 15.0, 10.0);
        assert!(close(c.x, 0.0) && close(c.y, 0.0));
        assert!(close(c.width, 1.0) && close(c.height, 1.0));
    }

    #[test]
    fn crop_continuous_at_tie() {
        // Just either side of a 3:2 target, both branches approach the full image.
        let below = centered_crop(2999.999, 2000.0, 3.0, 2.0);
        let above = centered_crop(3000.001, 2000.0, 3.0, 2.0);
        for c in [below, above] {
            assert!((c.width - 1.0).abs() < 1e-6);
            assert!((c.height - 1.0).abs() < 1e-6);
            assert!(c.x.abs() < 1e-6 && c.y.abs() < 1e-6);
        }
    }

    #[test]
    fn crop_always_in_bounds_and_on_aspect() {
        let images = [
            (1, 1),
            (1, 5000),
            (5000, 1),
            (640, 480),
            (480, 640),
            (1920, 1080),
            (3024, 4032),
            (2000, 2000),
        ];
        for &(iw, ih) in &images {
            for size in &CATALOG {
                for o in [Orientation::Portrait, Orientation::Landscape] {
                    let (tw, th) = size.dimensions_cm(o);
                    let c = centered_crop(iw as f64, ih as f64, tw, th);
                    assert!(c.is_within_bounds(EPS), "{iw}x{ih} {} {o}: {c:?}", size.id);
                    let pixel_aspect = (c.width * iw as f64) / (c.height * ih as f64);
                    assert!(
                        (pixel_aspect - tw / th).abs() < 1e-9,
                        "{iw}x{ih} {} {o}: aspect {pixel_aspect}",
                        size.id
                    );
                }
            }
        }
    }

    // ── CropRect ────────────────────────────────────────────────────────

    #[test]
    fn clamped_pulls_inside() {
        let c = CropRect::new(0.8, -0.2, 0.5, 0.5).clamped();
        assert!(close(c.x, 0.5));
        assert!(close(c.y, 0.0));
        assert!(c.is_within_bounds(0.0));

        let c = CropRect::new(0.1, 0.1, 3.0, f64::NAN).clamped();
        assert_eq!(c, CropRect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn resolve_to_pixels() {
        let r = CropRect::new(0.25, 0.0, 0.5, 1.0).resolve(4000, 3000);
        assert_eq!(r, Rect::new(1000, 0, 2000, 3000));
        assert!(CropRect::FULL.resolve(640, 480).is_full(640, 480));
    }

    #[test]
    fn rect_clamp() {
        let r = Rect::new(90, 90, 50, 50).clamp_to(100, 100);
        assert_eq!(r, Rect::new(90, 90, 10, 10));
        let r = Rect::new(200, 0, 0, 10).clamp_to(100, 100);
        assert_eq!(r, Rect::new(99, 0, 1, 10));
    }

    // ── fit_within ──────────────────────────────────────────────────────

    #[test]
    fn fit_within_downscales_longest_side() {
        let d = fit_within(4000, 3000, 200.0);
        assert!(close(d.width, 200.0));
        assert!(close(d.height, 150.0));
        let d = fit_within(1000, 4000, 200.0);
        assert!(close(d.width, 50.0));
        assert!(close(d.height, 200.0));
    }

    #[test]
    fn fit_within_never_upscales() {
        assert_eq!(fit_within(120, 80, 200.0), DisplaySize::new(120.0, 80.0));
    }

    #[test]
    fn downscale_within_import_cap() {
        assert_eq!(downscale_within(6000, 4000, 2000), Size::new(2000, 1333));
        assert_eq!(downscale_within(1800, 1200, 2000), Size::new(1800, 1200));
        assert_eq!(downscale_within(100_000, 10, 2000), Size::new(2000, 1));
    }

    #[test]
    fn downscale_within_zero_cap_keeps_one_pixel() {
        assert_eq!(downscale_within(10, 10, 0), Size::new(1, 1));
        assert_eq!(downscale_within(4000, 1000, 0), Size::new(1, 1));
        assert_eq!(downscale_within(1, 1, 0), Size::new(1, 1));
    }

    // ── GeometryEngine ──────────────────────────────────────────────────

    #[test]
    fn engine_rejects_degenerate_config() {
        for config in [
            CanvasConfig::default().ppcm(0.0),
            CanvasConfig::default().crop_dpi(f64::NAN),
            CanvasConfig::default().preview_max(-1.0),
        ] {
            assert!(matches!(
                GeometryEngine::new(&config),
                Err(EditorError::InvalidConfig { .. })
            ));
        }
        assert_eq!(
            GeometryEngine::new(&CanvasConfig::default()).unwrap(),
            GeometryEngine::default()
        );
    }

    #[test]
    fn classic_display_is_print_footprint() {
        let engine = GeometryEngine::default();
        let size = catalog::lookup("9x13").unwrap();
        let f = engine.classic(Size::new(3000, 4000), &size, Orientation::Portrait);
        assert_eq!(f.display, DisplaySize::new(108.0, 156.0));
        let f = engine.classic(Size::new(3000, 4000), &size, Orientation::Landscape);
        assert_eq!(f.display, DisplaySize::new(156.0, 108.0));
    }

    #[test]
    fn classic_crop_independent_of_dpi() {
        let size = catalog::lookup("11x16").unwrap();
        let image = Size::new(4032, 3024);
        let a = GeometryEngine::default().classic(image, &size, Orientation::Portrait);
        let b = GeometryEngine::new(&CanvasConfig::default().crop_dpi(72.0))
            .unwrap()
            .classic(
            image,
            &size,
            Orientation::Portrait,
        );
        assert!((a.crop.width - b.crop.width).abs() < 1e-12);
        assert!((a.crop.x - b.crop.x).abs() < 1e-12);
    }

    #[test]
    fn original_fixed_width() {
        let engine = GeometryEngine::default();
        let size = catalog::lookup("10x15").unwrap();
        let f = engine.original(
            Size::new(2000, 1000),
            &size,
            Orientation::Portrait,
            FixedSide::Width,
        );
        assert_eq!(f.display, DisplaySize::new(120.0, 60.0));
        assert!(f.crop.is_full());
    }

    #[test]
    fn original_fixed_height() {
        let engine = GeometryEngine::default();
        let size = catalog::lookup("10x15").unwrap();
        let f = engine.original(
            Size::new(2000, 1000),
            &size,
            Orientation::Portrait,
            FixedSide::Height,
        );
        assert_eq!(f.display, DisplaySize::new(360.0, 180.0));
    }

    #[test]
    fn unconstrained_caps_preview() {
        let engine = GeometryEngine::default();
        let f = engine.unconstrained(Size::new(800, 1600));
        assert!(f.display.approx_eq(&DisplaySize::new(100.0, 200.0), EPS));
        assert!(f.crop.is_full());

        let small = GeometryEngine::new(&CanvasConfig::default().preview_max(50.0)).unwrap();
        let f = small.unconstrained(Size::new(800, 1600));
        assert!(f.display.approx_eq(&DisplaySize::new(25.0, 50.0), EPS));
    }

    #[test]
    fn frame_dispatches_on_sizing() {
        let engine = GeometryEngine::default();
        let image = Size::new(4000, 3000);
        let size = catalog::lookup("10x15").unwrap();
        assert_eq!(
            engine.frame(image, &Sizing::Unconstrained),
            engine.unconstrained(image)
        );
        assert_eq!(
            engine.frame(
                image,
                &Sizing::Classic {
                    size,
                    orientation: Orientation::Landscape
                }
            ),
            engine.classic(image, &size, Orientation::Landscape)
        );
        assert_eq!(
            engine.frame(
                image,
                &Sizing::Original {
                    size,
                    orientation: Orientation::Landscape,
                    fixed_side: FixedSide::Height
                }
            ),
            engine.original(image, &size, Orientation::Landscape, FixedSide::Height)
        );
    }

    #[test]
    fn custom_scale_changes_footprint_only() {
        let engine = GeometryEngine::new(&CanvasConfig::default().ppcm(8.0)).unwrap();
        let size = catalog::lookup("9x13").unwrap();
        let f = engine.classic(Size::new(900, 1300), &size, Orientation::Portrait);
        assert_eq!(f.display, DisplaySize::new(72.0, 104.0));
        assert!(f.crop.width > 0.999 && f.crop.height > 0.999);
    }
}
