//! Link discovery restricted to one domain

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Accepts URLs that live under `https://<domain>`
#[derive(Debug, Clone)]
pub struct DomainFilter {
    prefix: String,
}

impl DomainFilter {
    pub fn new(domain: &str) -> Self {
        Self {
            prefix: format!("https://{}", domain.trim().to_ascii_lowercase()),
        }
    }

    /// The `https://<domain>` prefix every accepted URL starts with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The URL must start with the prefix, and the prefix must end at a host
    /// boundary so `https://example.com.evil.org` is rejected.
    pub fn allows(&self, url: &Url) -> bool {
        let Some(rest) = url.as_str().strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        matches!(rest.chars().next(), None | Some('/' | ':' | '?' | '#'))
    }
}

/// Extracts in-domain links from raw HTML
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    filter: DomainFilter,
}

impl LinkExtractor {
    pub fn new(allowed_domain: &str) -> Self {
        Self {
            filter: DomainFilter::new(allowed_domain),
        }
    }

    pub fn filter(&self) -> &DomainFilter {
        &self.filter
    }

    /// All anchor hrefs resolved against `base`, fragment-free, deduplicated
    /// in document order and restricted to the allowed domain
    pub fn extract(&self, html: &str, base: &Url) -> Vec<Url> {
        let document = Html::parse_document(html);
        let selector = match Selector::parse("a[href]") {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let Ok(mut url) = base.join(href.trim()) else {
                tracing::trace!("Skipping unresolvable href '{}' on {}", href, base);
                continue;
            };
            url.set_fragment(None);

            if self.filter.allows(&url) && seen.insert(url.as_str().to_string()) {
                urls.push(url);
            }
        }

        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_domain_filter_boundaries() {
        let filter = DomainFilter::new("www.example.org");
        assert!(filter.allows(&url("https://www.example.org")));
        assert!(filter.allows(&url("https://www.example.org/a/b")));
        assert!(filter.allows(&url("https://www.example.org:8443/x")));
        assert!(filter.allows(&url("https://www.example.org?page=2")));
        assert!(!filter.allows(&url("http://www.example.org/")));
        assert!(!filter.allows(&url("https://www.example.org.evil.net/")));
        assert!(!filter.allows(&url("https://example.org/")));
        assert!(!filter.allows(&url("https://other.com/www.example.org")));
    }

    #[test]
    fn test_extracts_and_resolves_relative_links() {
        let html = r#"
            <a href="/about">About</a>
            <a href="contact.html">Contact</a>
            <a href="https://www.example.org/news#top">News</a>
            <a href="https://other.com/page">Other</a>
            <a href="mailto:info@example.org">Mail</a>
            <a>No href</a>
        "#;
        let extractor = LinkExtractor::new("www.example.org");
        let links = extractor.extract(html, &url("https://www.example.org/dept/index.html"));

        let links: Vec<&str> = links.iter().map(Url::as_str).collect();
        assert_eq!(
            links,
            vec![
                "https://www.example.org/about",
                "https://www.example.org/dept/contact.html",
                "https://www.example.org/news",
            ]
        );
    }

    #[test]
    fn test_deduplicates_links() {
        let html = r#"<a href="/a">1</a><a href="/a#x">2</a><a href="https://www.example.org/a">3</a>"#;
        let extractor = LinkExtractor::new("www.example.org");
        let links = extractor.extract(html, &url("https://www.example.org/"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_every_link_has_domain_prefix() {
        let html = r#"<a href="//cdn.example.org/x">cdn</a><a href="../up">up</a><a href="?q=1">q</a>"#;
        let extractor = LinkExtractor::new("www.example.org");
        for link in extractor.extract(html, &url("https://www.example.org/a/b/")) {
            assert!(link.as_str().starts_with(extractor.filter().prefix()));
        }
    }
}
