//! Paginated report layout.
//!
//! A [Document] is an ordered script of [Element]s (section headings, paragraphs,
//! lists, tables, dividers and spacers). Generating it lays the elements out top to
//! bottom, breaking pages whenever the next piece of content would run into the footer,
//! and writes the result as a PDF.
//!
//! Layout talks to its surroundings only through small capability traits: [Canvas] to
//! draw, [FontProvider] and [TextMeasure] for fonts, and [ColourProvider] for the
//! palette. The crate ships an implementation of each ([Recorder], [FontSet], [Theme]).

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod content;

mod context;
pub use context::*;

mod document;
pub use document::*;

mod element;
pub use element::*;

mod font;
pub use font::*;

mod fontset;
pub use fontset::*;

mod info;

/// Utility functions and structures to layout text on pages
pub mod layout;

mod options;
pub use options::*;

mod pagesize;
pub use pagesize::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// Spacing, sizing and typography constants
pub mod style;

mod theme;
pub use theme::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

mod writer;

/// Re-export PDF-writer functionality
pub use pdf_writer;
