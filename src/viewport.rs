//! Zoom and pan of the infinite canvas.
//!
//! Screen position `s` of world point `w` is `s = w * zoom + pan`. Zoom is
//! any positive scalar; there is no clamp.

use log::trace;

use crate::config::ZOOM_STEP;
use crate::scale::CanvasScale;

/// A point in screen (stage) or world (canvas) space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Background grid spacing in world pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSpacing {
    /// Distance between thin lines.
    pub minor: f64,
    /// Distance between emphasized lines, every fifth minor line.
    pub major: f64,
}

/// Current zoom and pan.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Viewport {
    /// 100 %, no pan.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan_x: 0.0,
        pan_y: 0.0,
    };

    /// Set zoom directly. Non-finite or non-positive values are ignored.
    pub fn set_zoom(self, zoom: f64) -> Self {
        if !(zoom.is_finite() && zoom > 0.0) {
            return self;
        }
        Self { zoom, ..self }
    }

    /// Set pan directly (end of a stage drag).
    pub fn set_pan(self, x: f64, y: f64) -> Self {
        Self {
            pan_x: x,
            pan_y: y,
            ..self
        }
    }

    pub fn screen_to_world(&self, p: Point) -> Point {
        Point::new((p.x - self.pan_x) / self.zoom, (p.y - self.pan_y) / self.zoom)
    }

    pub fn world_to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan_x, p.y * self.zoom + self.pan_y)
    }

    /// Zoom one wheel notch around `pointer` (screen space) using the default step.
    pub fn zoom_at(self, pointer: Point, delta: f64) -> Self {
        self.zoom_at_with_step(pointer, delta, ZOOM_STEP)
    }

    /// Zoom one wheel notch around `pointer`, keeping the world point under
    /// it fixed.
    ///
    /// Positive `delta` (wheel down) zooms out by `step`, negative zooms in,
    /// zero does nothing.
    pub fn zoom_at_with_step(self, pointer: Point, delta: f64, step: f64) -> Self {
        if delta == 0.0 || delta.is_nan() {
            return self;
        }
        let anchor = self.screen_to_world(pointer);
        let zoom = if delta > 0.0 {
            self.zoom / step
        } else {
            self.zoom * step
        };
        let next = Self {
            zoom,
            pan_x: pointer.x - anchor.x * zoom,
            pan_y: pointer.y - anchor.y * zoom,
        };
        trace!(
            "zoom at ({}, {}): {} -> {}, pan ({}, {})",
            pointer.x, pointer.y, self.zoom, next.zoom, next.pan_x, next.pan_y
        );
        next
    }

    /// Grid density for the current zoom: 1 cm when zoomed in, 5 cm from
    /// 60 % down, 10 cm below 30 %.
    pub fn grid_spacing(&self, scale: CanvasScale) -> GridSpacing {
        let cm = scale.cm_to_px(1.0);
        let minor = if self.zoom < 0.3 {
            cm * 10.0
        } else if self.zoom < 0.6 {
            cm * 5.0
        } else {
            cm
        };
        GridSpacing {
            minor,
            major: minor * 5.0,
        }
    }
}
