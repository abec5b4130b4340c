use anyhow::Result;
use sitesearch::{config::Config, index::store, server::HttpServer};
use tracing::{info, warn};

pub async fn serve(mut config: Config, listen: Option<String>) -> Result<()> {
    if let Some(addr) = listen {
        config.http.listen_addr = addr;
    }

    if !store::exists(&config.index.index_dir) {
        warn!(
            "No index at {}; searches will report the index as unavailable",
            config.index.index_dir.display()
        );
    }

    HttpServer::from_config(&config)
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal");
        })
        .await
}
