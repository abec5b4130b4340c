//! HTTP page fetching
//!
//! The crawler talks to the network through the [`PageFetcher`] trait so the
//! crawl loop can be driven by an in-memory site in tests. [`HttpFetcher`] is
//! the reqwest-backed implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

use crate::config::CrawlConfig;

/// Errors that can occur during fetching
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status code: {0}")]
    Status(u16),
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),
    #[error("Content too large: {0} bytes")]
    ContentTooLarge(usize),
}

/// Source of raw HTML for the crawler
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its markup. Only 200 responses whose content
    /// type contains `text/html` succeed.
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Check status and content type of a response
pub(crate) fn validate_response(status: u16, content_type: &str) -> Result<(), FetchError> {
    if status != 200 {
        return Err(FetchError::Status(status));
    }
    if !content_type.contains("text/html") {
        return Err(FetchError::InvalidContentType(content_type.to_string()));
    }
    Ok(())
}

/// Reject a declared body length above `max`; lengths beyond `usize` saturate
pub(crate) fn check_content_length(len: Option<u64>, max: usize) -> Result<(), FetchError> {
    match len.map(|len| usize::try_from(len).unwrap_or(usize::MAX)) {
        Some(len) if len > max => Err(FetchError::ContentTooLarge(len)),
        _ => Ok(()),
    }
}

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Maximum response size (bytes)
    pub max_content_size: usize,
    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from_config(&CrawlConfig::default())
    }
}

impl FetchConfig {
    pub fn from_config(config: &CrawlConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            max_content_size: config.max_content_size,
            max_redirects: config.max_redirects,
        }
    }
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    http_client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Create a new fetcher
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.http_client.get(url.as_str()).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        validate_response(status, &content_type)?;

        check_content_length(response.content_length(), self.config.max_content_size)?;

        let body = response.text().await?;
        if body.len() > self.config.max_content_size {
            return Err(FetchError::ContentTooLarge(body.len()));
        }

        tracing::debug!(
            "Fetched {} ({} bytes) in {:?}",
            url,
            body.len(),
            start.elapsed()
        );
        Ok(body)
    }
}

/// Canned responses keyed by URL, for driving a crawl without a network
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, (u16, String, String)>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` as a 200 `text/html` page
    pub fn page(self, url: &str, body: &str) -> Self {
        self.response(url, 200, "text/html; charset=utf-8", body)
    }

    /// Serve an arbitrary status, content type and body
    pub fn response(mut self, url: &str, status: u16, content_type: &str, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            (status, content_type.to_string(), body.to_string()),
        );
        self
    }
}

#[async_trait]
impl PageFetcher for MemoryFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let (status, content_type, body) = self
            .responses
            .get(url.as_str())
            .ok_or(FetchError::Status(404))?;
        validate_response(*status, content_type)?;
        Ok(body.clone())
    }
}
