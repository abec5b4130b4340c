//! Anchor-only match detection
//!
//! Content indexed by this crate has its anchors removed before storage, so
//! on that content the check never fires. It applies to stored content that
//! still carries `<a>` markup.

use scraper::{Html, Selector};

/// True when `query` occurs, ignoring case, in the text or `href` of any
/// anchor in `html`
pub fn is_query_in_links(html: &str, query: &str) -> bool {
    let selector = match Selector::parse("a") {
        Ok(s) => s,
        Err(_) => return false,
    };
    let fragment = Html::parse_fragment(html);
    let query = query.to_lowercase();

    fragment.select(&selector).any(|anchor| {
        let text: String = anchor.text().collect();
        if text.to_lowercase().contains(&query) {
            return true;
        }
        anchor
            .value()
            .attr("href")
            .is_some_and(|href| href.to_lowercase().contains(&query))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_never_matches() {
        assert!(!is_query_in_links(
            "machine learning research group",
            "machine learning"
        ));
    }

    #[test]
    fn test_anchor_text_matches() {
        let html = r#"<p>Intro</p><a href="/x">Machine Learning Lab</a>"#;
        assert!(is_query_in_links(html, "machine learning"));
    }

    #[test]
    fn test_href_matches() {
        let html = r#"<a href="https://example.org/physics/news">News</a>"#;
        assert!(is_query_in_links(html, "PHYSICS"));
        assert!(!is_query_in_links(html, "chemistry"));
    }

    #[test]
    fn test_text_outside_anchor_does_not_match() {
        let html = r#"<p>physics</p><a href="/about">About</a>"#;
        assert!(!is_query_in_links(html, "physics"));
    }
}
