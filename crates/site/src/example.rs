use codewalk_segmenter::Segment;
use serde::{Deserialize, Serialize};

/// One documented code walkthrough: a display name, its URL slug, and the
/// decorated segments of each of its source files in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// URL-safe slug derived from `name`
    pub id: String,

    /// Human-readable display title
    pub name: String,

    /// One inner sequence per source file, in discovery order
    pub segments_by_file: Vec<Vec<Segment>>,

    /// The chronologically next example, or `None` for the last.
    /// A by-value summary rather than a back-reference: the page only
    /// needs the successor's id and name.
    pub next: Option<ExampleRef>,
}

/// Non-owning pointer to another example in the traversal chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRef {
    pub id: String,
    pub name: String,
}

impl Example {
    pub fn summary(&self) -> ExampleRef {
        ExampleRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Derive a URL-safe slug from a display name: lowercase, spaces and
/// slashes become hyphens, apostrophes vanish.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .replace('/', "-")
        .replace('\'', "")
}

/// Parse the ordered example list: one display name per line, blank lines
/// and `#` comment lines skipped.
pub fn parse_example_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
