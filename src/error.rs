//! Boundary validation errors.
//!
//! Only values entering the crate from outside are validated: layer requests,
//! identifier strings coming from UI controls, and configuration. Operations
//! that address a layer by id never fail; an unknown id is a no-op.

use alloc::string::String;

/// Error raised when building a request, parsing an identifier, or
/// validating a [`CanvasConfig`](crate::CanvasConfig).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EditorError {
    /// Image has zero width or height.
    #[error("image has zero width or height ({width}x{height})")]
    ZeroImageDimension { width: u32, height: u32 },

    /// Print size id not present in the catalog.
    #[error("unknown print size `{0}`")]
    UnknownPrintSize(String),

    #[error("unknown print mode `{0}`, expected `classic` or `original`")]
    UnknownPrintMode(String),

    #[error("unknown fixed side `{0}`, expected `width` or `height`")]
    UnknownFixedSide(String),

    #[error("unknown orientation `{0}`, expected `portrait` or `landscape`")]
    UnknownOrientation(String),

    /// A configuration value is out of range.
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}
