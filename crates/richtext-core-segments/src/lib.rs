#![warn(missing_docs)]
//! `richtext-core-segments` - alternative segmenters for `richtext-core`.
//!
//! `richtext-core` ships a character-class segmenter. This crate adds two more, both meant to be
//! wrapped in [`richtext_core::SegmentedRemoval`]:
//!
//! - [`WordBoundarySegmenter`]: Unicode (UAX #29) word boundaries, so `"can't"` or `"e\u{301}t\u{e9}"`
//!   stay single segments;
//! - [`PatternSegmenter`]: a regex describes the separators, everything between them is a word.
//!
//! ```rust
//! use richtext_core::{RemovalDirection, SegmentRemoval, SegmentedRemoval, TextRange};
//! use richtext_core_segments::PatternSegmenter;
//!
//! let removal = SegmentedRemoval::with_segmenter(PatternSegmenter::new(r"\s+").unwrap());
//! // "#quarterly-report" has no whitespace: it is one segment.
//! assert_eq!(
//!     removal.removal_range(9, 9, "#quarterly-report", 0, RemovalDirection::Backward),
//!     TextRange::new(0, 17)
//! );
//! ```

mod pattern;
mod word_boundary;

pub use pattern::{PatternSegmenter, SegmenterError};
pub use word_boundary::WordBoundarySegmenter;
