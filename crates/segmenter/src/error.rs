use thiserror::Error;

/// Result type for segmenter operations
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Errors that can occur while segmenting a source file
#[derive(Error, Debug)]
pub enum SegmentError {
    /// No highlighter language tag is mapped for this file
    #[error("No language tag for {0}")]
    NoLanguageForPath(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SegmentError {
    /// Create an unmapped-language error
    pub fn no_language(path: impl Into<String>) -> Self {
        Self::NoLanguageForPath(path.into())
    }
}
