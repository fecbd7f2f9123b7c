//! Centimeter to canvas-pixel conversion.
//!
//! Two independent scales exist. The on-screen preview uses
//! [`PPCM`] pixels per centimeter; crop aspect ratios are derived at print
//! resolution ([`cm_at_dpi`]). Both reduce to the same aspect ratio for a
//! given print size.

use crate::orientation::Orientation;

/// Canvas pixels per centimeter. A 9×13 cm print is 108×156 px on screen.
pub const PPCM: f64 = 12.0;

pub const CM_PER_INCH: f64 = 2.54;

/// On-canvas footprint in (fractional) canvas pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Swap width and height.
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Whether both sides are within `eps` of `other`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        let dw = self.width - other.width;
        let dh = self.height - other.height;
        dw <= eps && dw >= -eps && dh <= eps && dh >= -eps
    }
}

/// Converts physical print dimensions to canvas pixels.
///
/// ```
/// use zenprint::{CanvasScale, Orientation, DisplaySize};
///
/// let scale = CanvasScale::default();
/// assert_eq!(
///     scale.canvas_dimensions(9.0, 13.0, Orientation::Portrait),
///     DisplaySize::new(108.0, 156.0),
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasScale {
    pub ppcm: f64,
}

impl CanvasScale {
    pub const DEFAULT: Self = Self { ppcm: PPCM };

    pub const fn new(ppcm: f64) -> Self {
        Self { ppcm }
    }

    pub fn cm_to_px(self, cm: f64) -> f64 {
        cm * self.ppcm
    }

    pub fn px_to_cm(self, px: f64) -> f64 {
        px / self.ppcm
    }

    /// Canvas footprint of a `width_cm`×`height_cm` print held in `orientation`.
    ///
    /// Landscape swaps the axes before converting.
    pub fn canvas_dimensions(
        self,
        width_cm: f64,
        height_cm: f64,
        orientation: Orientation,
    ) -> DisplaySize {
        let (w, h) = orientation.apply(width_cm, height_cm);
        DisplaySize::new(self.cm_to_px(w), self.cm_to_px(h))
    }
}

impl Default for CanvasScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pixel length of `cm` at `dpi` dots per inch.
pub fn cm_at_dpi(cm: f64, dpi: f64) -> f64 {
    cm / CM_PER_INCH * dpi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_by_thirteen_portrait() {
        let d = CanvasScale::DEFAULT.canvas_dimensions(9.0, 13.0, Orientation::Portrait);
        assert_eq!(d, DisplaySize::new(108.0, 156.0));
    }

    #[test]
    fn landscape_swaps() {
        let scale = CanvasScale::DEFAULT;
        for (w, h) in [(9.0, 13.0), (10.0, 15.0), (11.0, 16.0), (13.0, 18.0)] {
            let p = scale.canvas_dimensions(w, h, Orientation::Portrait);
            let l = scale.canvas_dimensions(w, h, Orientation::Landscape);
            assert_eq!(p.transposed(), l);
        }
    }

    #[test]
    fn px_cm_inverse() {
        let scale = CanvasScale::new(8.0);
        assert_eq!(scale.cm_to_px(13.0), 104.0);
        assert_eq!(scale.px_to_cm(scale.cm_to_px(7.5)), 7.5);
    }

    #[test]
    fn print_resolution() {
        // 2.54 cm is one inch.
        assert!((cm_at_dpi(2.54, 300.0) - 300.0).abs() < 1e-9);
        // 15 cm at 300 DPI ≈ 1771.65 px.
        assert!((cm_at_dpi(15.0, 300.0) - 1771.653).abs() < 1e-3);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = DisplaySize::new(120.0, 60.0);
        assert!(a.approx_eq(&DisplaySize::new(120.0 + 1e-10, 60.0), 1e-9));
        assert!(!a.approx_eq(&DisplaySize::new(121.0, 60.0), 1e-9));
    }
}
