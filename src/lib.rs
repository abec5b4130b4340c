//! sitesearch: single-site search
//!
//! Crawls one website restricted to a domain, indexes the extracted text and
//! answers keyword/phrase queries with highlighted snippets and prefix
//! autocomplete:
//! - Sequential crawler with domain restriction (`scraping`)
//! - Unicode normalization, punctuation and stopword removal (`preprocess`)
//! - Tantivy-backed document index and autocomplete word store (`index`)
//! - Conjunctive phrase/word search with literal post-filtering (`retrieval`)
//! - Axum HTTP front end (`server`)

pub mod config;
pub mod index;
pub mod preprocess;
pub mod retrieval;
pub mod scraping;
pub mod server;
pub mod types;
pub mod util;

pub use config::Config;
pub use types::*;
