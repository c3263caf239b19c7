//! # codewalk renderer
//!
//! Turns raw segment text into markup: markdown for documentation,
//! syntax-highlighted HTML for code, with a content-addressed file cache
//! in front of the highlighter.
//!
//! The highlighter sits behind the [`MarkupRenderer`] trait so the cache
//! decorator and the tests never depend on a concrete backend.

mod cache;
mod decorate;
mod error;
mod highlight;
mod markdown;

pub use cache::{default_cache_dir, RenderCache};
pub use decorate::decorate_segments;
pub use error::{RenderError, Result};
pub use highlight::HighlightRenderer;
pub use markdown::render_markdown;

/// Capability interface for turning tagged source text into markup
pub trait MarkupRenderer {
    fn render(&self, tag: &str, source: &str) -> Result<String>;
}
