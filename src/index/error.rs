//! Index errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors from building or querying a persistent store
#[derive(Debug, Error)]
pub enum IndexError {
    /// No committed store exists at the location
    #[error("Index unavailable: no index at {}", .0.display())]
    Absent(PathBuf),
    /// The store exists but the query could not be parsed
    #[error("Malformed query: {0}")]
    MalformedQuery(String),
    #[error("Index error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to open index directory: {0}")]
    Directory(#[from] tantivy::directory::error::OpenDirectoryError),
}

impl IndexError {
    /// True when the store is missing, as opposed to broken or queried badly
    pub fn is_absent(&self) -> bool {
        matches!(self, IndexError::Absent(_))
    }
}
