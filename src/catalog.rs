//! Standard photo print sizes.
//!
//! Sizes are listed short side first, in centimeters, with inch equivalents
//! for reference only. Lookups are by id (`"10x15"`).
//!
//! ```
//! use zenprint::catalog;
//!
//! let size = catalog::lookup("10x15").unwrap();
//! assert_eq!(size.width_cm, 10.0);
//! assert!(!size.is_square());
//! assert!(catalog::lookup("20x30").is_none());
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::error::EditorError;
use crate::orientation::Orientation;

/// A named physical print size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrintSize {
    /// Stable identifier, e.g. `"9x13"`.
    pub id: &'static str,
    /// Human-readable name, e.g. `"9 × 13"`.
    pub name: &'static str,
    pub width_cm: f64,
    pub height_cm: f64,
    /// Reference only; geometry is always derived from the cm values.
    pub width_inches: f64,
    /// Reference only; geometry is always derived from the cm values.
    pub height_inches: f64,
}

impl PrintSize {
    /// Square sizes have no orientation; toggling them is a no-op.
    pub fn is_square(&self) -> bool {
        self.width_cm == self.height_cm
    }

    /// Physical `(width, height)` in centimeters as held in `orientation`.
    pub fn dimensions_cm(&self, orientation: Orientation) -> (f64, f64) {
        orientation.apply(self.width_cm, self.height_cm)
    }

    /// Physical aspect ratio (width / height) as held in `orientation`.
    pub fn aspect(&self, orientation: Orientation) -> f64 {
        let (w, h) = self.dimensions_cm(orientation);
        w / h
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for PrintSize {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| EditorError::UnknownPrintSize(String::from(s)))
    }
}

/// All available print sizes, smallest first.
pub const CATALOG: [PrintSize; 4] = [
    PrintSize {
        id: "9x13",
        name: "9 × 13",
        width_cm: 9.0,
        height_cm: 13.0,
        width_inches: 3.54,
        height_inches: 5.12,
    },
    PrintSize {
        id: "10x15",
        name: "10 × 15",
        width_cm: 10.0,
        height_cm: 15.0,
        width_inches: 3.94,
        height_inches: 5.91,
    },
    PrintSize {
        id: "11x16",
        name: "11 × 16",
        width_cm: 11.0,
        height_cm: 16.0,
        width_inches: 4.33,
        height_inches: 6.30,
    },
    PrintSize {
        id: "13x18",
        name: "13 × 18",
        width_cm: 13.0,
        height_cm: 18.0,
        width_inches: 5.12,
        height_inches: 7.09,
    },
];

/// Size assigned to newly imported photos (the smallest entry).
pub fn default_size() -> PrintSize {
    CATALOG[0]
}

/// Find a catalogued size by id.
pub fn lookup(id: &str) -> Option<PrintSize> {
    CATALOG.iter().find(|s| s.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_and_unique() {
        for pair in CATALOG.windows(2) {
            assert!(pair[0].width_cm < pair[1].width_cm);
            assert_ne!(pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn catalog_is_short_side_first() {
        for size in &CATALOG {
            assert!(size.width_cm <= size.height_cm, "{}", size.id);
            assert!(!size.is_square());
        }
    }

    #[test]
    fn inches_match_centimeters() {
        for size in &CATALOG {
            assert!((size.width_cm / 2.54 - size.width_inches).abs() < 0.01);
            assert!((size.height_cm / 2.54 - size.height_inches).abs() < 0.01);
        }
    }

    #[test]
    fn default_is_nine_by_thirteen() {
        assert_eq!(default_size().id, "9x13");
    }

    #[test]
    fn lookup_and_parse() {
        assert_eq!(lookup("13x18").unwrap().height_cm, 18.0);
        assert_eq!("11x16".parse::<PrintSize>().unwrap(), CATALOG[2]);
        assert_eq!(
            "4x6".parse::<PrintSize>(),
            Err(EditorError::UnknownPrintSize("4x6".into()))
        );
    }

    #[test]
    fn square_detection() {
        let square = PrintSize {
            id: "15x15",
            name: "15 × 15",
            width_cm: 15.0,
            height_cm: 15.0,
            width_inches: 5.91,
            height_inches: 5.91,
        };
        assert!(square.is_square());
        assert_eq!(
            square.dimensions_cm(Orientation::Landscape),
            square.dimensions_cm(Orientation::Portrait)
        );
    }

    #[test]
    fn oriented_dimensions() {
        let size = lookup("10x15").unwrap();
        assert_eq!(size.dimensions_cm(Orientation::Portrait), (10.0, 15.0));
        assert_eq!(size.dimensions_cm(Orientation::Landscape), (15.0, 10.0));
        assert!((size.aspect(Orientation::Landscape) - 1.5).abs() < 1e-12);
    }
}
