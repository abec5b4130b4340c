//! HTTP server

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::AppState;
use super::routes::create_router;
use crate::config::Config;
use crate::preprocess::TextPreprocessor;

/// Search and autocomplete over HTTP
pub struct HttpServer {
    listen_addr: String,
    state: AppState,
}

impl HttpServer {
    pub fn new(listen_addr: impl Into<String>, state: AppState) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            state,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let state = AppState::new(
            config.index.index_dir.clone(),
            config.index.autocomplete_dir.clone(),
            config.search.clone(),
            config.http.max_query_length,
        )
        .with_stopwords(
            TextPreprocessor::from_config(&config.preprocess)
                .stopwords()
                .clone(),
        );
        Self::new(config.http.listen_addr.clone(), state)
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = self
            .listen_addr
            .parse()
            .context("Invalid HTTP listen address")?;

        let app = create_router(self.state).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr)
            .await
            .context("Failed to bind HTTP server")?;

        info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("HTTP server shutting down");
            })
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
