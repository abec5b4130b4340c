//! HTTP front end
//!
//! - `GET /search?q=` returns the query and its results
//! - `GET /autocomplete?prefix=` returns a JSON array of words
//! - `GET /health`

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::HttpServer;
