//! Index, search, and preprocessing configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent store locations and build policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory of the main document index
    pub index_dir: PathBuf,
    /// Directory of the autocomplete word store
    pub autocomplete_dir: PathBuf,
    /// Pages with fewer preprocessed tokens than this are not indexed
    pub min_tokens: usize,
    /// Writer memory budget in bytes
    pub writer_memory_bytes: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_dir: PathBuf::from("index"),
            autocomplete_dir: PathBuf::from("autocomplete_index"),
            min_tokens: 10,
            writer_memory_bytes: 50_000_000, // 50MB buffer
        }
    }
}

/// Query-time configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum results returned by a search (at most 10)
    pub max_results: usize,
    /// Words of context on each side of a match
    pub snippet_window: usize,
    /// Maximum sentences contributing to one snippet
    pub max_snippets: usize,
    /// Maximum autocomplete suggestions
    pub autocomplete_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            snippet_window: 5,
            max_snippets: 2,
            autocomplete_limit: 5,
        }
    }
}

/// Text preprocessing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Replacement stopword list; the built-in English list is used when unset
    pub stopwords: Option<Vec<String>>,
}
