use crate::error::{RenderError, Result};
use crate::MarkupRenderer;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// In-process syntax highlighter backed by syntect's bundled syntaxes.
///
/// Replaces the classic pattern of piping source through an external
/// highlighter binary; the [`MarkupRenderer`] seam keeps the rest of the
/// pipeline independent of this choice.
pub struct HighlightRenderer {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl HighlightRenderer {
    pub fn new() -> Self {
        let themes = ThemeSet::load_defaults();
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme: themes.themes["InspiredGitHub"].clone(),
        }
    }

    /// Resolve a language tag to a syntect token.
    ///
    /// The `console` tag covers shell walkthrough transcripts; syntect has
    /// no syntax under that name, so it rides on the bash grammar.
    fn syntect_token(tag: &str) -> &str {
        match tag {
            "console" => "bash",
            other => other,
        }
    }
}

impl Default for HighlightRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for HighlightRenderer {
    fn render(&self, tag: &str, source: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(Self::syntect_token(tag))
            .ok_or_else(|| RenderError::unknown_language(tag))?;
        highlighted_html_for_string(source, &self.syntaxes, syntax, &self.theme)
            .map_err(|err| RenderError::highlight(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_resolve() {
        let renderer = HighlightRenderer::new();
        for tag in ["go", "rust", "python", "console"] {
            let out = renderer.render(tag, "x = 1").unwrap();
            assert!(out.contains("<pre"), "no markup for tag {tag}");
        }
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let renderer = HighlightRenderer::new();
        let err = renderer.render("not-a-language", "x").unwrap_err();
        assert!(matches!(err, RenderError::UnknownLanguage(_)));
    }

    #[test]
    fn test_output_escapes_source() {
        let renderer = HighlightRenderer::new();
        let out = renderer.render("go", "a := b < c").unwrap();
        assert!(out.contains("&lt;"));
    }
}
