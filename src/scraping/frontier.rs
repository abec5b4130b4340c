//! Crawl frontier
//!
//! A set-backed worklist: pending URLs are taken in no particular order.
//! A URL is never both pending and visited, and a visited or failed URL is
//! never queued again.

use std::collections::HashSet;
use url::Url;

/// Outcome of offering a URL to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueue {
    /// Newly queued
    Queued,
    /// Already pending
    AlreadyQueued,
    /// Already fetched successfully
    AlreadyVisited,
    /// Fetch failed earlier in this crawl
    PreviouslyFailed,
}

/// Pending and visited URL sets for one crawl
#[derive(Debug, Default)]
pub struct CrawlFrontier {
    pending: HashSet<Url>,
    visited: HashSet<Url>,
    failed: HashSet<Url>,
}

impl CrawlFrontier {
    /// Create a frontier holding only the seed URL
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.pending.insert(seed);
        frontier
    }

    /// Offer a discovered URL
    pub fn enqueue(&mut self, url: Url) -> Enqueue {
        if self.visited.contains(&url) {
            return Enqueue::AlreadyVisited;
        }
        if self.failed.contains(&url) {
            return Enqueue::PreviouslyFailed;
        }
        if self.pending.insert(url) {
            Enqueue::Queued
        } else {
            Enqueue::AlreadyQueued
        }
    }

    /// Remove an arbitrary pending URL
    pub fn pop(&mut self) -> Option<Url> {
        let url = self.pending.iter().next().cloned()?;
        self.pending.remove(&url);
        Some(url)
    }

    /// Record a successful fetch
    pub fn mark_visited(&mut self, url: Url) {
        self.pending.remove(&url);
        self.visited.insert(url);
    }

    /// Record a failed fetch; the URL is not visited but will not be retried
    pub fn mark_failed(&mut self, url: Url) {
        self.pending.remove(&url);
        self.failed.insert(url);
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    pub fn is_pending(&self, url: &Url) -> bool {
        self.pending.contains(url)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}
