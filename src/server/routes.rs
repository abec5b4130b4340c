//! HTTP route definitions

use axum::{routing::get, Router};

use super::handlers::{self, AppState};

/// Create the router with all routes
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/search", get(handlers::search))
        .route("/autocomplete", get(handlers::autocomplete))
        .with_state(app_state)
}
