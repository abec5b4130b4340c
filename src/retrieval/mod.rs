//! Query-time retrieval
//!
//! - `query`: phrase/word parsing and the literal post-filter
//! - `engine`: index lookup, filtering and result assembly
//! - `snippet`: highlighted word-window snippets
//! - `links`: anchor-only match detection

mod engine;
mod links;
mod query;
mod snippet;

pub use engine::{search, QueryEngine};
pub use links::is_query_in_links;
pub use query::ParsedQuery;
pub use snippet::{generate_snippet, DEFAULT_MAX_SNIPPETS, DEFAULT_WORD_WINDOW, NO_SNIPPET};
