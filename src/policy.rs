//! Sizing policy: how a layer's footprint relates to its print size.
//!
//! ```text
//!     Unconstrained ──set size──▶ Classic ◀──mode──▶ Original(side)
//!           ▲                        │                    │
//!           └──────set None──────────┴────────────────────┘
//! ```
//!
//! Transitions are pure: each returns the next [`Sizing`], or `None` when
//! the transition does not apply (square sizes reject orientation toggles,
//! unconstrained layers have no mode). Geometry is recomputed by the caller
//! through [`GeometryEngine::frame`](crate::GeometryEngine::frame).

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::catalog::{self, PrintSize};
use crate::error::EditorError;
use crate::geometry::Size;
use crate::orientation::Orientation;

/// How a constrained layer fills its print size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PrintMode {
    /// Crop the image to the exact print aspect ratio.
    #[default]
    Classic,
    /// Pin one side to the print size, derive the other from the image.
    Original,
}

/// Which side an [`Original`](PrintMode::Original) layer pins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FixedSide {
    #[default]
    Width,
    Height,
}

impl FixedSide {
    pub fn flipped(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

/// A layer's sizing policy.
///
/// Each variant carries exactly the fields it needs, so a fixed side
/// without original mode, or an orientation without a print size, cannot
/// be expressed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sizing {
    /// Free size: natural aspect, capped preview, no crop.
    Unconstrained,
    /// Cropped to the print's aspect ratio; footprint is the print size.
    Classic {
        size: PrintSize,
        orientation: Orientation,
    },
    /// Full image, one side pinned to the print size.
    Original {
        size: PrintSize,
        orientation: Orientation,
        fixed_side: FixedSide,
    },
}

impl Sizing {
    /// Policy for a freshly imported image: default print size, classic
    /// mode, orientation following the image.
    pub fn initial(image: Size) -> Self {
        Self::Classic {
            size: catalog::default_size(),
            orientation: Orientation::detect(image.width, image.height),
        }
    }

    pub fn print_size(&self) -> Option<PrintSize> {
        match *self {
            Self::Unconstrained => None,
            Self::Classic { size, .. } | Self::Original { size, .. } => Some(size),
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match *self {
            Self::Unconstrained => None,
            Self::Classic { orientation, .. } | Self::Original { orientation, .. } => {
                Some(orientation)
            }
        }
    }

    pub fn mode(&self) -> Option<PrintMode> {
        match self {
            Self::Unconstrained => None,
            Self::Classic { .. } => Some(PrintMode::Classic),
            Self::Original { .. } => Some(PrintMode::Original),
        }
    }

    pub fn fixed_side(&self) -> Option<FixedSide> {
        match *self {
            Self::Original { fixed_side, .. } => Some(fixed_side),
            _ => None,
        }
    }

    pub fn is_constrained(&self) -> bool {
        !matches!(self, Self::Unconstrained)
    }

    /// Flip orientation.
    ///
    /// Original mode also flips the fixed side: pinning "width" in portrait
    /// and in landscape refers to different physical edges. Returns `None`
    /// for unconstrained layers and square sizes.
    pub fn toggle_orientation(self) -> Option<Self> {
        match self {
            Self::Unconstrained => None,
            Self::Classic { size, .. } | Self::Original { size, .. } if size.is_square() => None,
            Self::Classic { size, orientation } => Some(Self::Classic {
                size,
                orientation: orientation.toggled(),
            }),
            Self::Original {
                size,
                orientation,
                fixed_side,
            } => Some(Self::Original {
                size,
                orientation: orientation.toggled(),
                fixed_side: fixed_side.flipped(),
            }),
        }
    }

    /// Switch mode, keeping size and orientation. `fixed_side` is only used
    /// when switching to original. Returns `None` for unconstrained layers.
    pub fn with_mode(self, mode: PrintMode, fixed_side: FixedSide) -> Option<Self> {
        let size = self.print_size()?;
        let orientation = self.orientation()?;
        Some(match mode {
            PrintMode::Classic => Self::Classic { size, orientation },
            PrintMode::Original => Self::Original {
                size,
                orientation,
                fixed_side,
            },
        })
    }

    /// Change print size, keeping mode, orientation, and fixed side.
    ///
    /// `None` drops the constraint. An unconstrained layer gaining a size
    /// enters classic mode with orientation detected from `image`.
    pub fn with_print_size(self, size: Option<PrintSize>, image: Size) -> Self {
        let Some(size) = size else {
            return Self::Unconstrained;
        };
        match self {
            Self::Unconstrained => Self::Classic {
                size,
                orientation: Orientation::detect(image.width, image.height),
            },
            Self::Classic { orientation, .. } => Self::Classic { size, orientation },
            Self::Original {
                orientation,
                fixed_side,
                ..
            } => Self::Original {
                size,
                orientation,
                fixed_side,
            },
        }
    }
}

impl fmt::Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Classic => "classic",
            Self::Original => "original",
        })
    }
}

impl FromStr for PrintMode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "original" => Ok(Self::Original),
            _ => Err(EditorError::UnknownPrintMode(String::from(s))),
        }
    }
}

impl fmt::Display for FixedSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}

impl FromStr for FixedSide {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            _ => Err(EditorError::UnknownFixedSide(String::from(s))),
        }
    }
}
