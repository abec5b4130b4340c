//! Core types shared by the crawl, index and query stages

use serde::{Deserialize, Serialize};

/// A crawled page: its URL and the clean text extracted from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub url: String,
    pub content: String,
}

impl Page {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }
}

/// An index entry. `url` is the unique key; `content` is the preprocessed
/// token stream, stored verbatim for retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub content: String,
}

/// One search hit as handed to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub snippet: String,
}
