//! Single-site crawling
//!
//! Key components:
//! - `PageFetcher`: HTTP fetching behind a trait (`HttpFetcher`, `MemoryFetcher`)
//! - `ContentExtractor`: HTML to clean text, anchors and scripts removed
//! - `LinkExtractor`: absolute in-domain links from anchors
//! - `CrawlFrontier`: pending/visited/failed URL sets
//! - `Crawler`: the sequential crawl loop
//! - `dump`: the plain-text crawl artifact

pub mod crawler;
pub mod dump;
pub mod extractor;
pub mod fetcher;
pub mod frontier;
pub mod links;

pub use crawler::{crawl, CrawlStats, Crawler};
pub use dump::{parse_dump, read_dump_file, write_dump, write_dump_file};
pub use extractor::{extract_clean_content, ContentExtractor};
pub use fetcher::{FetchConfig, FetchError, HttpFetcher, MemoryFetcher, PageFetcher};
pub use frontier::{CrawlFrontier, Enqueue};
pub use links::{DomainFilter, LinkExtractor};
