//! Print orientation and the axis swap it implies.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::error::EditorError;

/// Which way a print is held.
///
/// Print sizes are catalogued short side first (9×13 means 9 cm wide,
/// 13 cm tall). Landscape swaps the axes.
///
/// ```text
///     Portrait    Landscape
///     ┌────┐      ┌────────┐
///     │    │      │        │
///     │    │      └────────┘
///     └────┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Orientation {
    /// Short side horizontal.
    #[default]
    Portrait,
    /// Long side horizontal.
    Landscape,
}

impl Orientation {
    /// Orientation matching an image's natural aspect ratio.
    ///
    /// Strictly wider images are landscape; square images stay portrait.
    pub fn detect(width: u32, height: u32) -> Self {
        Self::from_landscape(width > height)
    }

    /// From an `is_landscape` flag, as stored by layer records.
    pub fn from_landscape(landscape: bool) -> Self {
        if landscape {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }

    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    /// Whether this orientation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        self.is_landscape()
    }

    /// Orient a catalogue `(width, height)` pair.
    pub fn apply<T>(self, width: T, height: T) -> (T, T) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        })
    }
}

impl FromStr for Orientation {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" | "P" => Ok(Self::Portrait),
            "landscape" | "L" => Ok(Self::Landscape),
            _ => Err(EditorError::UnknownOrientation(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_flag_round_trips() {
        for flag in [false, true] {
            assert_eq!(Orientation::from_landscape(flag).is_landscape(), flag);
        }
        assert_eq!(Orientation::from_landscape(false), Orientation::Portrait);
    }

    #[test]
    fn detect_from_aspect() {
        assert_eq!(Orientation::detect(4000, 3000), Orientation::Landscape);
        assert_eq!(Orientation::detect(3000, 4000), Orientation::Portrait);
        // Square images default to portrait.
        assert_eq!(Orientation::detect(2000, 2000), Orientation::Portrait);
    }

    #[test]
    fn toggle_is_involution() {
        for o in [Orientation::Portrait, Orientation::Landscape] {
            assert_ne!(o.toggled(), o);
            assert_eq!(o.toggled().toggled(), o);
        }
    }

    #[test]
    fn apply_swaps_only_for_landscape() {
        assert_eq!(Orientation::Portrait.apply(9, 13), (9, 13));
        assert_eq!(Orientation::Landscape.apply(9, 13), (13, 9));
    }

    #[test]
    fn parse_and_display() {
        for o in [Orientation::Portrait, Orientation::Landscape] {
            let s = alloc::format!("{o}");
            assert_eq!(s.parse::<Orientation>().unwrap(), o);
        }
        assert_eq!("L".parse::<Orientation>().unwrap(), Orientation::Landscape);
        assert!(matches!(
            "sideways".parse::<Orientation>(),
            Err(EditorError::UnknownOrientation(_))
        ));
    }
}
