//! Single-domain crawler
//!
//! Sequential: one fetch in flight, frontier updated between fetches.
//! Fetch failures are logged and the URL is dropped for the rest of the run.

use tracing::{debug, info, warn};
use url::Url;

use super::extractor::ContentExtractor;
use super::fetcher::PageFetcher;
use super::frontier::{CrawlFrontier, Enqueue};
use super::links::LinkExtractor;
use crate::types::Page;

/// Per-crawl counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Successful fetches
    pub fetched: usize,
    /// Failed fetches
    pub failed: usize,
    /// Pages with non-empty content
    pub pages: usize,
    /// URLs newly queued from links
    pub discovered: usize,
}

/// Crawls one site, following links only within the allowed domain
pub struct Crawler<F> {
    fetcher: F,
    links: LinkExtractor,
    extractor: ContentExtractor,
    max_pages: Option<usize>,
    stats: CrawlStats,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F, allowed_domain: &str, max_pages: Option<usize>) -> Self {
        Self {
            fetcher,
            links: LinkExtractor::new(allowed_domain),
            extractor: ContentExtractor::new(),
            max_pages,
            stats: CrawlStats::default(),
        }
    }

    /// Counters from the last crawl
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    fn under_limit(&self, frontier: &CrawlFrontier) -> bool {
        self.max_pages
            .map_or(true, |max| frontier.visited_count() < max)
    }

    /// Crawl from `seed` until the frontier is exhausted or `max_pages`
    /// pages have been visited
    pub async fn crawl(&mut self, seed: &Url) -> Vec<Page> {
        self.stats = CrawlStats::default();
        let mut frontier = CrawlFrontier::with_seed(seed.clone());
        let mut pages = Vec::new();

        info!(
            "Starting crawl at {} (domain prefix {}, max pages {:?})",
            seed,
            self.links.filter().prefix(),
            self.max_pages
        );

        while !frontier.is_empty() && self.under_limit(&frontier) {
            let Some(url) = frontier.pop() else {
                break;
            };
            if frontier.is_visited(&url) {
                continue;
            }

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Error crawling {}: {}", url, e);
                    self.stats.failed += 1;
                    frontier.mark_failed(url);
                    continue;
                }
            };

            self.stats.fetched += 1;
            frontier.mark_visited(url.clone());

            let content = self.extractor.extract_clean_content(&html);
            if content.is_empty() {
                debug!("No text content on {}", url);
            } else {
                pages.push(Page::new(url.as_str(), content));
                self.stats.pages += 1;
            }

            let mut queued = 0;
            for link in self.links.extract(&html, &url) {
                if frontier.enqueue(link) == Enqueue::Queued {
                    queued += 1;
                }
            }
            self.stats.discovered += queued;
            debug!(
                "Visited {} ({} new links, {} pending)",
                url,
                queued,
                frontier.pending_count()
            );
        }

        info!(
            "Crawl finished: {} pages, {} fetched, {} failed, {} still pending",
            pages.len(),
            self.stats.fetched,
            self.stats.failed,
            frontier.pending_count()
        );

        pages
    }
}

/// Crawl `seed`, following links under `https://<allowed_domain>`
pub async fn crawl<F: PageFetcher>(
    fetcher: F,
    seed: &Url,
    allowed_domain: &str,
    max_pages: Option<usize>,
) -> Vec<Page> {
    Crawler::new(fetcher, allowed_domain, max_pages)
        .crawl(seed)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraping::fetcher::MemoryFetcher;
    use std::collections::HashSet;

    const DOMAIN: &str = "www.example.org";

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn site() -> MemoryFetcher {
        MemoryFetcher::new()
            .page(
                "https://www.example.org/",
                r#"<html><body><h1>Welcome</h1>
                   <a href="/a">A</a> <a href="/b">B</a>
                   <a href="https://other.org/x">elsewhere</a>
                   <a href="https://www.example.org.evil.net/">spoof</a></body></html>"#,
            )
            .page(
                "https://www.example.org/a",
                r#"<body><p>Page A text</p><a href="/">home</a><a href="/b">B</a><a href="/c">C</a></body>"#,
            )
            .page(
                "https://www.example.org/b",
                r#"<body><p>Page B text</p><a href="/a">A</a><a href="/missing">gone</a></body>"#,
            )
            .page(
                "https://www.example.org/c",
                r#"<body><script>only()</script><a href="/b">B</a></body>"#,
            )
            .response("https://www.example.org/missing", 404, "text/html", "")
            .page("https://other.org/x", "<p>must never be fetched</p>")
    }

    #[tokio::test]
    async fn test_crawl_visits_reachable_domain_pages_once() {
        let mut crawler = Crawler::new(site(), DOMAIN, None);
        let pages = crawler.crawl(&url("https://www.example.org/")).await;

        let urls: Vec<&str> = pages.iter().map(|p| p.url.as_str()).collect();
        let unique: HashSet<&str> = urls.iter().copied().collect();
        assert_eq!(urls.len(), unique.len(), "pages must not repeat");

        // /c has no text, /missing fails
        let expected: HashSet<&str> = [
            "https://www.example.org/",
            "https://www.example.org/a",
            "https://www.example.org/b",
        ]
        .into_iter()
        .collect();
        assert_eq!(unique, expected);

        let stats = crawler.stats();
        assert_eq!(stats.fetched, 4);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.pages, 3);
    }

    #[tokio::test]
    async fn test_pages_stay_on_domain_and_exclude_anchor_text() {
        let pages = crawl(site(), &url("https://www.example.org/"), DOMAIN, None).await;
        for page in &pages {
            assert!(page.url.starts_with("https://www.example.org"));
            assert!(!page.content.contains("elsewhere"));
            assert!(!page.content.contains("spoof"));
        }
        let home = pages
            .iter()
            .find(|p| p.url == "https://www.example.org/")
            .unwrap();
        assert_eq!(home.content, "Welcome");
    }

    #[tokio::test]
    async fn test_max_pages_caps_visits() {
        let mut crawler = Crawler::new(site(), DOMAIN, Some(2));
        let pages = crawler.crawl(&url("https://www.example.org/")).await;
        assert!(pages.len() <= 2);
        assert_eq!(crawler.stats().fetched, 2);
    }

    #[tokio::test]
    async fn test_failed_seed_yields_nothing() {
        let fetcher = MemoryFetcher::new().response(
            "https://www.example.org/",
            200,
            "application/json",
            "{}",
        );
        let mut crawler = Crawler::new(fetcher, DOMAIN, None);
        let pages = crawler.crawl(&url("https://www.example.org/")).await;
        assert!(pages.is_empty());
        assert_eq!(crawler.stats().failed, 1);
        assert_eq!(crawler.stats().fetched, 0);
    }

    #[tokio::test]
    async fn test_failed_url_is_not_retried() {
        // Both pages link to the broken URL; it must be attempted once
        let fetcher = MemoryFetcher::new()
            .page(
                "https://www.example.org/",
                r#"<p>root</p><a href="/broken">x</a><a href="/next">n</a>"#,
            )
            .page("https://www.example.org/next", r#"<p>next</p><a href="/broken">x</a>"#);
        let mut crawler = Crawler::new(fetcher, DOMAIN, None);
        crawler.crawl(&url("https://www.example.org/")).await;
        assert_eq!(crawler.stats().failed, 1);
        assert_eq!(crawler.stats().fetched, 2);
    }

    #[tokio::test]
    async fn test_self_links_terminate() {
        let fetcher = MemoryFetcher::new().page(
            "https://www.example.org/loop",
            r#"<p>loop</p><a href="/loop">again</a><a href="/loop#frag">again</a>"#,
        );
        let pages = crawl(fetcher, &url("https://www.example.org/loop"), DOMAIN, None).await;
        assert_eq!(pages.len(), 1);
    }
}
