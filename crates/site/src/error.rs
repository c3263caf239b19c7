use std::path::PathBuf;
use thiserror::Error;

/// Result type for site assembly and output
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors that can occur while assembling and writing the site
#[derive(Error, Debug)]
pub enum SiteError {
    /// Filesystem operation failed
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Source-file glob pattern was invalid
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A globbed path could not be read
    #[error("Glob failed: {0}")]
    Glob(#[from] glob::GlobError),

    /// Segmentation failed (unmapped extension or unreadable file)
    #[error(transparent)]
    Segment(#[from] codewalk_segmenter::SegmentError),

    /// Rendering a segment failed
    #[error(transparent)]
    Render(#[from] codewalk_renderer::RenderError),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl SiteError {
    /// Attach the failing path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
