//! Markdown to HTML conversion.

use comrak::Options;

use crate::document::RenderedHtml;

/// Renders Markdown to an untrusted HTML fragment.
///
/// Enables the GFM table, strikethrough and autolink extensions on top of
/// CommonMark. Raw HTML in the source is emitted as is so the sanitizer sees
/// exactly what the author wrote. Fenced code languages are carried on the
/// `<pre lang="...">` attribute rather than a class.
pub struct MarkdownRenderer {
    options: Options<'static>,
}

impl MarkdownRenderer {
    /// Creates renderer with standard Markdown options.
    ///
    /// Configures:
    /// - Tables, strikethrough, autolinks
    /// - Raw HTML passthrough (filtered later by the sanitizer)
    /// - Code block language as `lang` attribute on `<pre>`
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;

        // Untrusted: sanitized downstream
        options.render.unsafe_ = true;
        options.render.github_pre_lang = true;

        Self { options }
    }

    /// Renders Markdown source bytes to HTML.
    ///
    /// Never fails. Invalid UTF-8 sequences are replaced with U+FFFD and
    /// malformed Markdown degrades to literal text.
    ///
    /// # Arguments
    ///
    /// * `source`: Raw Markdown bytes
    ///
    /// # Returns
    ///
    /// Rendered, unsanitized HTML fragment
    pub fn render(&self, source: &[u8]) -> RenderedHtml {
        let content = String::from_utf8_lossy(source);
        RenderedHtml::new(comrak::markdown_to_html(&content, &self.options))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new()
            .render(markdown.as_bytes())
            .as_str()
            .to_string()
    }

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let markdown = "# Hello\n\nThis is **bold**.";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<h1>Hello</h1>"), "Should contain h1: {}", html);
        assert!(
            html.contains("<p>This is <strong>bold</strong>.</p>"),
            "Should contain paragraph with strong: {}",
            html
        );
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let markdown = r#"
| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |
"#;

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<table>"), "Should contain table tag");
        assert!(html.contains("<th>"), "Should contain table header");
        assert!(html.contains("Header 1"), "Should contain header text");
        assert!(html.contains("<td>"), "Should contain table cell");
        assert!(html.contains("Cell 1"), "Should contain cell text");
    }

    #[test]
    fn test_render_gfm_strikethrough() {
        // Arrange
        let markdown = "This is ~~strikethrough~~ text.";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<del>"), "Should contain del tag: {}", html);
        assert!(html.contains("strikethrough"), "Should contain text");
    }

    #[test]
    fn test_render_code_block_language_on_pre() {
        // Arrange
        let markdown = "```rust\nfn main() {}\n```\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(
            html.contains("<pre lang=\"rust\"><code>"),
            "Language should be carried on pre: {}",
            html
        );
        assert!(html.contains("fn main() {}"), "Should contain code");
    }

    #[test]
    fn test_render_code_span_escapes_markup() {
        // Arrange
        let markdown = "Use `<b>` for bold.";

        // Act
        let html = render(markdown);

        // Assert
        assert!(
            html.contains("<code>&lt;b&gt;</code>"),
            "Code span content should be escaped: {}",
            html
        );
    }

    #[test]
    fn test_render_lists_links_images() {
        // Arrange
        let markdown = "- [site](https://example.com \"Example\")\n- ![logo](logo.png)\n\n1. one\n2. two\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<ul>"), "Should contain unordered list");
        assert!(html.contains("<ol>"), "Should contain ordered list");
        assert!(
            html.contains("<a href=\"https://example.com\" title=\"Example\">site</a>"),
            "Should contain link: {}",
            html
        );
        assert!(
            html.contains("<img src=\"logo.png\" alt=\"logo\""),
            "Should contain image: {}",
            html
        );
    }

    #[test]
    fn test_render_blockquote_rule_and_hard_break() {
        // Arrange
        let markdown = "> quoted\n\n---\n\nline one  \nline two\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<blockquote>"), "Should contain blockquote");
        assert!(html.contains("<hr />"), "Should contain rule: {}", html);
        assert!(html.contains("<br />"), "Should contain hard break: {}", html);
    }

    #[test]
    fn test_render_autolink() {
        // Arrange
        let markdown = "Visit https://example.com today.";

        // Act
        let html = render(markdown);

        // Assert
        assert!(
            html.contains("<a href=\"https://example.com\">"),
            "Bare URL should become link: {}",
            html
        );
    }

    #[test]
    fn test_render_raw_html_passthrough() {
        // Arrange
        let markdown = "<div class=\"note\">raw</div>\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(
            html.contains("<div class=\"note\">raw</div>"),
            "Raw HTML should reach the sanitizer untouched: {}",
            html
        );
    }

    #[test]
    fn test_render_malformed_markdown_degrades_to_text() {
        // Arrange
        let markdown = "**unclosed emphasis and [broken link(";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains("<p>"), "Should still produce paragraph");
        assert!(html.contains("**unclosed"), "Markers kept as text: {}", html);
        assert!(html.contains("[broken link("), "Markers kept as text: {}", html);
    }

    #[test]
    fn test_render_invalid_utf8_is_lossy() {
        // Arrange
        let source = [b'a', 0xff, b'b'];

        // Act
        let html = MarkdownRenderer::new().render(&source);

        // Assert
        assert!(
            html.as_str().contains('\u{FFFD}'),
            "Invalid bytes should become replacement chars: {}",
            html.as_str()
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = b"# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n*x* ~~y~~ `z`\n";

        // Act
        let first = renderer.render(markdown);
        let second = renderer.render(markdown);

        // Assert
        assert_eq!(first, second, "Same input should render identically");
    }

    #[test]
    fn test_render_empty_input() {
        // Arrange & Act
        let html = render("");

        // Assert
        assert!(html.is_empty(), "Empty input should render empty: {}", html);
    }
}
