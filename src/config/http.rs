//! HTTP API configuration

use serde::{Deserialize, Serialize};

/// HTTP API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Listen address for HTTP server (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Queries longer than this (bytes) are rejected
    pub max_query_length: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".to_string(),
            max_query_length: 1024,
        }
    }
}
