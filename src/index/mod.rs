//! Persistent full-text stores
//!
//! - `builder`: crawled pages into the document index
//! - `autocomplete`: the word store and prefix suggestions
//! - `store`: schemas and open/create rules shared by both

pub mod autocomplete;
pub mod builder;
pub mod error;
pub mod store;

pub use autocomplete::{AutocompleteIndex, AutocompleteService};
pub use builder::{build_index, IndexBuilder, IndexReport};
pub use error::IndexError;
pub use store::DocumentFields;
