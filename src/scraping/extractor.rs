//! Plain-text extraction from HTML
//!
//! Drops `<script>`, `<style>` and anchor subtrees, then emits every
//! remaining text node on its own line. Lines are trimmed and empty lines
//! dropped, so the result never carries navigation text.

use scraper::Html;

/// Elements whose text never reaches the index
const EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "a"];

/// Content extractor
#[derive(Debug, Clone, Default)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract clean text from raw HTML
    pub fn extract_clean_content(&self, html: &str) -> String {
        extract_clean_content(html)
    }
}

/// Extract clean text from raw HTML, one non-empty trimmed line per text run
pub fn extract_clean_content(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut lines: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let excluded = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|elem| EXCLUDED_ELEMENTS.contains(&elem.name()))
        });
        if excluded {
            continue;
        }

        lines.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_style_and_anchors() {
        let html = r#"
            <html>
            <head>
                <title>Faculty</title>
                <style>body { color: red; }</style>
                <script>var tracking = "secret";</script>
            </head>
            <body>
                <nav><a href="/home">Home</a> | <a href="/about">About us</a></nav>
                <h1>Research</h1>
                <p>Our department studies <a href="/ml">machine learning</a> systems.</p>
            </body>
            </html>
        "#;

        let text = extract_clean_content(html);
        assert!(!text.contains("color: red"));
        assert!(!text.contains("tracking"));
        assert!(!text.contains("Home"));
        assert!(!text.contains("About us"));
        assert!(!text.contains("machine learning"));
        assert!(text.contains("Research"));
        assert!(text.contains("Our department studies"));
        assert!(text.contains("systems."));
    }

    #[test]
    fn test_lines_are_trimmed_and_non_empty() {
        let html = "<body><p>   first line   </p>\n\n<div>\n   second\n\n   third   </div></body>";
        let text = extract_clean_content(html);
        assert_eq!(text, "first line\nsecond\nthird");
        for line in text.lines() {
            assert_eq!(line, line.trim());
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn test_preserves_document_order() {
        let html = "<body><h1>One</h1><p>Two</p><ul><li>Three</li><li>Four</li></ul></body>";
        assert_eq!(extract_clean_content(html), "One\nTwo\nThree\nFour");
    }

    #[test]
    fn test_nested_content_inside_anchor_is_dropped() {
        let html = r#"<body><a href="/x"><span>Inner <b>bold</b></span></a><p>Kept</p></body>"#;
        assert_eq!(extract_clean_content(html), "Kept");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_clean_content(""), "");
        assert_eq!(extract_clean_content("<html><body><script>x()</script></body></html>"), "");
    }
}
