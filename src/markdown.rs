//! Markdown Rendering
//!
//! Renders profile text with pulldown-cmark. Raw HTML in the source is
//! escaped rather than passed through.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_emphasis() {
        let html = parse_markdown("I like **Rust**.\n\nSecond paragraph.");
        assert_eq!(html, "<p>I like <strong>Rust</strong>.</p>\n<p>Second paragraph.</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hi <script>x</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
