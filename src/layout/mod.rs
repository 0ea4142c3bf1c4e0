//! Text layout utilities.
//!
//! The engine uses a single strategy, [`GreedyWrap`](crate::layout::GreedyWrap): whole
//! words are packed onto a line until the next one would overflow. Measurement is
//! supplied by the caller, so the same code wraps against embedded TrueType metrics,
//! the standard PDF font widths, or a fixed-width stub in tests.
//!
//! # Example
//!
//! ```
//! use pdf_report::layout::wrap_text;
//! use pdf_report::{BuiltinFont, Pt};
//!
//! let lines = wrap_text("Hello, wide world!", Pt(60.0), |line| {
//!     BuiltinFont::Helvetica.width_of_text(line, Pt(12.0))
//! });
//! assert_eq!(lines, vec!["Hello, wide", "world!"]);
//! ```

mod wrap;

pub use wrap::*;
