//! Canvas configuration.
//!
//! Defaults carry the visible contract: 12 px/cm preview scale, 300 DPI crop
//! reference, 200 px free-size preview cap, 1.12 zoom step per wheel notch.
//!
//! ```
//! use zenprint::CanvasConfig;
//!
//! let config = CanvasConfig::default().ppcm(8.0).zoom_step(1.2);
//! assert!(config.validate().is_ok());
//! assert!(CanvasConfig::default().ppcm(0.0).validate().is_err());
//! ```

use crate::catalog;
use crate::error::EditorError;
use crate::orientation::Orientation;
use crate::scale::{CanvasScale, PPCM};

/// Crop aspect reference resolution.
pub const CROP_DPI: f64 = 300.0;

/// Longest side of a free-size (unconstrained) preview, in canvas pixels.
pub const PREVIEW_MAX: f64 = 200.0;

/// Zoom multiplier per wheel notch.
pub const ZOOM_STEP: f64 = 1.12;

/// Longest side the upload pipeline should decode to. 15 cm at 300 DPI is
/// about 1800 px.
pub const IMPORT_MAX_DIMENSION: u32 = 2000;

/// Editor-wide tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CanvasConfig {
    /// Canvas pixels per centimeter.
    pub ppcm: f64,
    /// Resolution used to derive classic-mode crop aspect ratios.
    pub crop_dpi: f64,
    /// Longest side of an unconstrained preview.
    pub preview_max: f64,
    /// Zoom multiplier per wheel notch (> 1).
    pub zoom_step: f64,
    /// Where imported photos land on the canvas.
    pub import_grid: ImportGrid,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            ppcm: PPCM,
            crop_dpi: CROP_DPI,
            preview_max: PREVIEW_MAX,
            zoom_step: ZOOM_STEP,
            import_grid: ImportGrid::default(),
        }
    }
}

impl CanvasConfig {
    pub fn ppcm(mut self, ppcm: f64) -> Self {
        self.ppcm = ppcm;
        self
    }

    pub fn crop_dpi(mut self, dpi: f64) -> Self {
        self.crop_dpi = dpi;
        self
    }

    pub fn preview_max(mut self, px: f64) -> Self {
        self.preview_max = px;
        self
    }

    pub fn zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }

    pub fn import_grid(mut self, grid: ImportGrid) -> Self {
        self.import_grid = grid;
        self
    }

    pub fn scale(&self) -> CanvasScale {
        CanvasScale::new(self.ppcm)
    }

    /// Reject values that would make the geometry degenerate.
    pub fn validate(&self) -> Result<(), EditorError> {
        positive("ppcm", self.ppcm)?;
        positive("crop_dpi", self.crop_dpi)?;
        positive("preview_max", self.preview_max)?;
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(EditorError::InvalidConfig {
                field: "zoom_step",
                value: self.zoom_step,
                reason: "must be finite and greater than 1",
            });
        }
        if self.import_grid.columns == 0 {
            return Err(EditorError::InvalidConfig {
                field: "import_grid.columns",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        if !(self.import_grid.spacing.is_finite() && self.import_grid.margin.is_finite()) {
            return Err(EditorError::InvalidConfig {
                field: "import_grid",
                value: f64::NAN,
                reason: "spacing and margin must be finite",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), EditorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EditorError::InvalidConfig {
            field,
            value,
            reason: "must be finite and positive",
        })
    }
}

/// Grid placement for newly imported photos.
///
/// Cells are sized for a default-size portrait print plus `spacing`, so a
/// freshly imported batch does not overlap.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ImportGrid {
    pub columns: u32,
    /// Gap between cells, in canvas pixels.
    pub spacing: f64,
    /// Offset of the first cell from the canvas origin.
    pub margin: f64,
}

impl Default for ImportGrid {
    fn default() -> Self {
        Self {
            columns: 3,
            spacing: 20.0,
            margin: 50.0,
        }
    }
}

impl ImportGrid {
    /// Canvas origin of import slot `slot` (row-major).
    pub fn origin(&self, slot: usize, scale: CanvasScale) -> (f64, f64) {
        let columns = self.columns.max(1) as usize;
        let col = (slot % columns) as f64;
        let row = (slot / columns) as f64;
        let cell = scale.canvas_dimensions(
            catalog::default_size().width_cm,
            catalog::default_size().height_cm,
            Orientation::Portrait,
        );
        (
            self.margin + col * (cell.width + self.spacing),
            self.margin + row * (cell.height + self.spacing),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_scale() {
        for bad in [0.0, -12.0, f64::NAN, f64::INFINITY] {
            let err = CanvasConfig::default().ppcm(bad).validate().unwrap_err();
            assert!(
                matches!(err, EditorError::InvalidConfig { field: "ppcm", .. }),
                "{bad}: {err:?}"
            );
        }
        assert!(CanvasConfig::default().crop_dpi(0.0).validate().is_err());
        assert!(CanvasConfig::default().preview_max(-1.0).validate().is_err());
    }

    #[test]
    fn zoom_step_must_exceed_one() {
        assert!(CanvasConfig::default().zoom_step(1.0).validate().is_err());
        assert!(CanvasConfig::default().zoom_step(0.9).validate().is_err());
        assert!(CanvasConfig::default().zoom_step(1.01).validate().is_ok());
    }

    #[test]
    fn zero_columns_rejected() {
        let grid = ImportGrid {
            columns: 0,
            ..ImportGrid::default()
        };
        assert!(CanvasConfig::default().import_grid(grid).validate().is_err());
    }

    #[test]
    fn import_grid_wraps_after_three() {
        let grid = ImportGrid::default();
        let scale = CanvasScale::DEFAULT;
        assert_eq!(grid.origin(0, scale), (50.0, 50.0));
        // 9 cm * 12 + 20 = 128
        assert_eq!(grid.origin(1, scale), (178.0, 50.0));
        assert_eq!(grid.origin(2, scale), (306.0, 50.0));
        // 13 cm * 12 + 20 = 176
        assert_eq!(grid.origin(3, scale), (50.0, 226.0));
        assert_eq!(grid.origin(7, scale), (178.0, 402.0));
    }
}
