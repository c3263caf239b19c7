use crate::error::{Result, SegmentError};
use std::path::Path;

/// Highlighter language for a source file, fixed by extension.
///
/// The mapping is closed on purpose: a file with an extension outside it
/// should never have been selected for processing, so lookup failure is a
/// configuration error rather than something to paper over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Rust,
    Python,
    /// Shell transcripts (`.sh` files holding command + output walkthroughs)
    Console,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "py" => Some(Language::Python),
            "sh" => Some(Language::Console),
            _ => None,
        }
    }

    /// Detect language from file path; unmapped extensions are fatal
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| SegmentError::no_language(path.display().to_string()))
    }

    /// Highlighter tag, also used as the render-cache key component
    pub fn tag(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Python => "python",
            Language::Console => "console",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("go"), Some(Language::Go));
        assert_eq!(Language::from_extension("GO"), Some(Language::Go));
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("sh"), Some(Language::Console));
        assert_eq!(Language::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("hello/hello.go").unwrap(), Language::Go);
        assert_eq!(
            Language::from_path("hello/hello.sh").unwrap(),
            Language::Console
        );
        assert!(Language::from_path("hello/hello.txt").is_err());
        assert!(Language::from_path("no_extension").is_err());
    }

    #[test]
    fn test_unmapped_extension_names_the_path() {
        let err = Language::from_path("walkthrough/notes.md").unwrap_err();
        assert!(err.to_string().contains("walkthrough/notes.md"));
    }

    #[test]
    fn test_tag() {
        assert_eq!(Language::Go.tag(), "go");
        assert_eq!(Language::Console.tag(), "console");
    }
}
