//! HTTP request handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::types::*;
use crate::config::SearchConfig;
use crate::index::{AutocompleteService, IndexError};
use crate::preprocess::Stopwords;
use crate::retrieval::QueryEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub index_dir: Arc<PathBuf>,
    pub search: SearchConfig,
    pub autocomplete: Arc<AutocompleteService>,
    pub max_query_length: usize,
    /// Words the index was built without
    pub stopwords: Arc<Stopwords>,
}

impl AppState {
    pub fn new(
        index_dir: impl Into<PathBuf>,
        autocomplete_dir: impl Into<PathBuf>,
        search: SearchConfig,
        max_query_length: usize,
    ) -> Self {
        let autocomplete = AutocompleteService::new(autocomplete_dir, search.autocomplete_limit);
        Self {
            index_dir: Arc::new(index_dir.into()),
            search,
            autocomplete: Arc::new(autocomplete),
            max_query_length,
            stopwords: Arc::new(Stopwords::default()),
        }
    }

    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search endpoint
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.trim().to_string();
    if query.is_empty() {
        return Json(SearchResponse {
            query,
            results: Vec::new(),
        })
        .into_response();
    }

    if query.len() > state.max_query_length {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "QUERY_TOO_LARGE",
                format!(
                    "Query length {} exceeds maximum allowed length of {} bytes",
                    query.len(),
                    state.max_query_length
                ),
            )),
        )
            .into_response();
    }

    debug!("HTTP search request: q={}", query);

    let index_dir = state.index_dir.clone();
    let config = state.search.clone();
    let stopwords = Stopwords::clone(&state.stopwords);
    let q = query.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        QueryEngine::open(&index_dir, config)?
            .with_stopwords(stopwords)
            .search(&q)
    })
    .await;

    match outcome {
        Ok(Ok(results)) => Json(SearchResponse { query, results }).into_response(),
        Ok(Err(e)) => index_error_response(e),
        Err(e) => {
            error!("Search task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal_error("Search task failed")),
            )
                .into_response()
        }
    }
}

fn index_error_response(e: IndexError) -> Response {
    match e {
        IndexError::Absent(_) => {
            warn!("Search requested but {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::index_unavailable(e.to_string())),
            )
                .into_response()
        }
        IndexError::MalformedQuery(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::malformed_query(e.to_string())),
        )
            .into_response(),
        other => {
            error!("Search failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("INDEX_ERROR", other.to_string())),
            )
                .into_response()
        }
    }
}

/// Autocomplete endpoint; always answers with a (possibly empty) JSON array
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Json<Vec<String>> {
    let prefix = params.prefix.trim().to_string();
    if prefix.is_empty() {
        return Json(Vec::new());
    }

    let service = state.autocomplete.clone();
    match tokio::task::spawn_blocking(move || service.suggest(&prefix)).await {
        Ok(words) => Json(words),
        Err(e) => {
            error!("Autocomplete task failed: {}", e);
            Json(Vec::new())
        }
    }
}
