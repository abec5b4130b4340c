//! Crawl and fetch configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::DEFAULT_USER_AGENT;

/// Crawler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Seed URL the crawl starts from
    pub seed_url: String,
    /// Hostname that discovered links must stay on (e.g. "www.example.org")
    pub allowed_domain: String,
    /// Stop after this many pages have been visited (unbounded when unset)
    pub max_pages: Option<usize>,
    /// Request timeout (seconds)
    pub request_timeout_secs: u64,
    /// Connection timeout (seconds)
    pub connect_timeout_secs: u64,
    /// Maximum redirects to follow per request
    pub max_redirects: usize,
    /// Maximum response body size (bytes)
    pub max_content_size: usize,
    /// User agent string
    pub user_agent: String,
    /// Where the `crawl` command writes its plain-text dump
    pub dump_path: PathBuf,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: String::new(),
            allowed_domain: String::new(),
            max_pages: Some(1000),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
            max_content_size: 10 * 1024 * 1024, // 10 MB
            user_agent: DEFAULT_USER_AGENT.to_string(),
            dump_path: PathBuf::from("data/crawled_pages.txt"),
        }
    }
}
