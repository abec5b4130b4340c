//! HTTP request/response types

use serde::{Deserialize, Serialize};

use crate::types::SearchResult;

/// `GET /search` parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /autocomplete` parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteParams {
    #[serde(default)]
    pub prefix: String,
}

/// Search response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as received, trimmed
    pub query: String,
    pub results: Vec<SearchResult>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn index_unavailable(message: impl Into<String>) -> Self {
        Self::new("INDEX_UNAVAILABLE", message)
    }

    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_QUERY", message)
    }
}
