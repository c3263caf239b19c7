use thiserror::Error;

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering segment markup
#[derive(Error, Debug)]
pub enum RenderError {
    /// The highlighter has no syntax for this language tag.
    /// Files are mapped to tags up front, so this is a configuration
    /// error rather than a per-file condition.
    #[error("No highlighter syntax for language tag '{0}'")]
    UnknownLanguage(String),

    /// Syntax highlighting failed
    #[error("Highlighting failed: {0}")]
    HighlightError(String),

    /// IO error occurred (cache reads/writes)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RenderError {
    /// Create an unknown-language error
    pub fn unknown_language(tag: impl Into<String>) -> Self {
        Self::UnknownLanguage(tag.into())
    }

    /// Create a highlighting error
    pub fn highlight(msg: impl Into<String>) -> Self {
        Self::HighlightError(msg.into())
    }
}
