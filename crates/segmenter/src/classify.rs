use once_cell::sync::Lazy;
use regex::Regex;

/// Comment-prefixed narrative line: optional leading whitespace, a line
/// comment marker, then one whitespace character.
static DOCS_PAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(//|#)\s").expect("docs pattern is valid"));

/// Maintenance annotation that must never reach the output.
static SKIP_PAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(//|#) todo: ").expect("skip pattern is valid"));

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line; resets the scan state, stored nowhere
    Blank,
    /// Maintenance annotation; dropped without touching the scan state
    Skip,
    /// Documentation line with its comment prefix stripped
    Doc(String),
    /// Code line, kept verbatim
    Code(String),
}

/// Classify one source line.
///
/// The skip pattern is tested before the doc pattern: a `// todo: ` line
/// would otherwise classify as documentation and leak the marker into the
/// rendered prose.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if SKIP_PAT.is_match(line) {
        return LineKind::Skip;
    }
    if DOCS_PAT.is_match(line) {
        return LineKind::Doc(DOCS_PAT.replace(line, "").into_owned());
    }
    LineKind::Code(line.to_string())
}
