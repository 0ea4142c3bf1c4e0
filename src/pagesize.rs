//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! rounded to whole points. Use [`Orientation`] with [`PaperSize::size`], or the
//! [`PageOrientation`] trait on a raw [`PageSize`], to get a landscape page.
//!
//! # Available Sizes
//!
//! ## ISO A-Series
//! `A3`, `A4`, `A5`
//!
//! ## ISO B-Series
//! `B4`, `B5`
//!
//! ## North American
//! `LETTER`, `LEGAL`, `TABLOID`, `EXECUTIVE`
//!
//! # Example
//!
//! ```
//! use pdf_report::{Orientation, PageOrientation, PaperSize, A4};
//! use pdf_report::Pt;
//!
//! let (width, height) = PaperSize::Letter.size(Orientation::Portrait);
//! assert_eq!((width, height), (Pt(612.0), Pt(792.0)));
//!
//! assert_eq!(A4.landscape(), (Pt(842.0), Pt(595.0)));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// iso a-series
pub const A3: PageSize = (Pt(842.0), Pt(1191.0));
pub const A4: PageSize = (Pt(595.0), Pt(842.0));
pub const A5: PageSize = (Pt(420.0), Pt(595.0));

// iso b-series
pub const B4: PageSize = (Pt(709.0), Pt(1001.0));
pub const B5: PageSize = (Pt(499.0), Pt(709.0));

// north american sizes
pub const LETTER: PageSize = (Pt(612.0), Pt(792.0));
pub const LEGAL: PageSize = (Pt(612.0), Pt(1008.0));
pub const TABLOID: PageSize = (Pt(792.0), Pt(1224.0));
pub const EXECUTIVE: PageSize = (Pt(522.0), Pt(756.0));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// Which way up the page is
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// The named paper sizes a document can be configured with
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
    A3,
    A5,
    Tabloid,
    Executive,
    B4,
    B5,
}

impl PaperSize {
    /// Every supported paper size, in declaration order
    pub const ALL: [PaperSize; 9] = [
        PaperSize::A4,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::A3,
        PaperSize::A5,
        PaperSize::Tabloid,
        PaperSize::Executive,
        PaperSize::B4,
        PaperSize::B5,
    ];

    /// Portrait (width, height) in points
    pub fn dimensions(self) -> PageSize {
        match self {
            PaperSize::A4 => A4,
            PaperSize::A3 => A3,
            PaperSize::A5 => A5,
            PaperSize::B4 => B4,
            PaperSize::B5 => B5,
            PaperSize::Letter => LETTER,
            PaperSize::Legal => LEGAL,
            PaperSize::Tabloid => TABLOID,
            PaperSize::Executive => EXECUTIVE,
        }
    }

    /// (width, height) in points for the given orientation
    pub fn size(self, orientation: Orientation) -> PageSize {
        match orientation {
            Orientation::Portrait => self.dimensions().portrait(),
            Orientation::Landscape => self.dimensions().landscape(),
        }
    }

    /// Human-readable name with metric and imperial measurements
    pub fn description(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4 (210mm × 297mm / 8.27\" × 11.69\")",
            PaperSize::A3 => "A3 (297mm × 420mm / 11.69\" × 16.54\")",
            PaperSize::A5 => "A5 (148mm × 210mm / 5.83\" × 8.27\")",
            PaperSize::B4 => "B4 (250mm × 353mm / 9.84\" × 13.90\")",
            PaperSize::B5 => "B5 (176mm × 250mm / 6.93\" × 9.84\")",
            PaperSize::Letter => "Letter (8.5\" × 11\" / 215.9mm × 279.4mm)",
            PaperSize::Legal => "Legal (8.5\" × 14\" / 215.9mm × 355.6mm)",
            PaperSize::Tabloid => "Tabloid (11\" × 17\" / 279.4mm × 431.8mm)",
            PaperSize::Executive => "Executive (7.25\" × 10.5\" / 184.15mm × 266.7mm)",
        }
    }

    /// Where the size is typically used
    pub fn usage(self) -> &'static str {
        match self {
            PaperSize::A4 => "International standard, most common worldwide",
            PaperSize::A3 => "Large prints, posters, international",
            PaperSize::A5 => "Small books, notepads, international",
            PaperSize::B4 => "Between A3 and A4, used in Asia",
            PaperSize::B5 => "Between A4 and A5, used in Asia",
            PaperSize::Letter => "Standard in USA, Canada, Mexico",
            PaperSize::Legal => "Legal documents in USA",
            PaperSize::Tabloid => "Large prints in USA",
            PaperSize::Executive => "Personal stationery in USA",
        }
    }
}
