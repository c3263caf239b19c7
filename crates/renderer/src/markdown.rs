use pulldown_cmark::{html, Parser};

/// Render markdown narrative text to HTML.
///
/// Infallible: pulldown-cmark accepts any input, so malformed prose
/// degrades to literal text rather than an error.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraph() {
        assert_eq!(render_markdown("hello world"), "<p>hello world</p>\n");
    }

    #[test]
    fn test_inline_code_and_emphasis() {
        let out = render_markdown("use `fmt.Println` for *output*");
        assert!(out.contains("<code>fmt.Println</code>"));
        assert!(out.contains("<em>output</em>"));
    }

    #[test]
    fn test_multi_line_doc_text_is_one_paragraph() {
        let out = render_markdown("first line\nsecond line");
        assert_eq!(out.matches("<p>").count(), 1);
    }
}
