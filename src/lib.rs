//! Print-size layer geometry, stacking order, and viewport model for photo
//! layout canvases.
//!
//! Pure data in, data out: no decoding, no rendering, `no_std` + `alloc`
//! compatible. Every mutation consumes the current state and returns the
//! next consistent one.
//!
//! # Modules
//!
//! - [`catalog`] — Standard print sizes (9×13, 10×15, 11×16, 13×18 cm)
//! - [`scale`] — Centimeter to canvas-pixel conversion
//! - [`policy`] — Sizing policy (free, classic crop, original aspect) and its transitions
//! - [`geometry`] — Crop rectangles and display sizes per policy
//! - [`stack`] — Ordered layers with selection, contiguous `z_index`
//! - [`viewport`] — Zoom/pan with pointer-anchored zoom
//! - [`editor`], [`command`] — Combined state and intent dispatch
//!
//! # Example
//!
//! ```
//! use zenprint::{EditorState, FixedSide, LayerRequest, PrintMode, catalog};
//!
//! let editor = EditorState::new().map_stack(|s| {
//!     s.add(LayerRequest::new("beach.jpg", (), 2000, 1000).unwrap())
//! });
//! let id = editor.selected().unwrap();
//!
//! let editor = editor.map_stack(|s| {
//!     s.set_print_size(id, catalog::lookup("10x15"))
//!         .set_print_mode(id, PrintMode::Original, FixedSide::Width)
//! });
//!
//! // 2:1 photo held landscape: 15 cm wide, height from the photo's aspect.
//! let layer = &editor.layers()[0];
//! assert_eq!(layer.display_size().width, 180.0);
//! assert_eq!(layer.display_size().height, 90.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod catalog;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod orientation;
pub mod policy;
pub mod scale;
pub mod stack;
pub mod viewport;

pub use catalog::{CATALOG, PrintSize};
pub use command::{Command, Shortcut};
pub use config::{CanvasConfig, IMPORT_MAX_DIMENSION, ImportGrid};
pub use editor::EditorState;
pub use error::EditorError;
pub use geometry::{
    CropRect, Frame, GeometryEngine, Rect, Size, centered_crop, downscale_within, fit_within,
};
pub use layer::{Layer, LayerId, LayerPatch, LayerRequest};
pub use orientation::Orientation;
pub use policy::{FixedSide, PrintMode, Sizing};
pub use scale::{CanvasScale, DisplaySize, PPCM};
pub use stack::{Direction, LayerStack};
pub use viewport::{GridSpacing, Point, Viewport};
