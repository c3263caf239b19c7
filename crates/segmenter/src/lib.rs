//! # codewalk segmenter
//!
//! Single-pass segmentation of annotated source files into alternating
//! documentation and code segments.
//!
//! Each line is classified as blank, a maintenance annotation (dropped),
//! a documentation line (comment prefix stripped), or code (verbatim).
//! Consecutive same-kind lines accumulate into one [`Segment`]; a blank
//! line resets the scan so the next line opens a fresh segment. Rendering
//! of the raw text fields happens downstream in `codewalk-renderer`.
//!
//! ## Example
//!
//! ```rust
//! use codewalk_segmenter::{segment_str, SegmentKind};
//!
//! let segs = segment_str("// Prints a greeting.\nprintln!(\"hi\");");
//! assert_eq!(segs.len(), 2);
//! assert_eq!(segs[0].kind, SegmentKind::Doc);
//! assert_eq!(segs[0].docs, "Prints a greeting.");
//! assert_eq!(segs[1].code, "println!(\"hi\");");
//! ```

mod classify;
mod error;
mod language;
mod segment;

pub use classify::{classify, LineKind};
pub use error::{Result, SegmentError};
pub use language::Language;
pub use segment::{segment_file, segment_lines, segment_str, Segment, SegmentKind};
