use crate::error::Result;
use crate::markdown::render_markdown;
use crate::MarkupRenderer;
use codewalk_segmenter::{Language, Segment};

/// Populate the rendered fields of each segment.
///
/// Docs go through the markdown renderer; code goes through the (usually
/// cache-wrapped) highlighter with the file's language tag. A field is
/// rendered only when its raw counterpart is non-empty.
pub fn decorate_segments(
    segments: &mut [Segment],
    language: Language,
    highlighter: &dyn MarkupRenderer,
) -> Result<()> {
    for seg in segments {
        if !seg.docs.is_empty() {
            seg.docs_rendered = render_markdown(&seg.docs);
        }
        if !seg.code.is_empty() {
            seg.code_rendered = highlighter.render(language.tag(), &seg.code)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codewalk_segmenter::segment_str;
    use pretty_assertions::assert_eq;

    struct StubHighlighter;

    impl MarkupRenderer for StubHighlighter {
        fn render(&self, tag: &str, source: &str) -> Result<String> {
            Ok(format!("<pre data-lang=\"{tag}\">{source}</pre>"))
        }
    }

    #[test]
    fn test_decorates_both_kinds() {
        let mut segs = segment_str("// A greeting.\nprintln!(\"hi\");");
        decorate_segments(&mut segs, Language::Rust, &StubHighlighter).unwrap();

        assert_eq!(segs[0].docs_rendered, "<p>A greeting.</p>\n");
        assert_eq!(segs[0].code_rendered, "");
        assert_eq!(
            segs[1].code_rendered,
            "<pre data-lang=\"rust\">println!(\"hi\");</pre>"
        );
        assert_eq!(segs[1].docs_rendered, "");
    }

    #[test]
    fn test_language_tag_reaches_highlighter() {
        let mut segs = segment_str("$ echo hi");
        decorate_segments(&mut segs, Language::Console, &StubHighlighter).unwrap();
        assert!(segs[0].code_rendered.contains("data-lang=\"console\""));
    }
}
