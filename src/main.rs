use anyhow::Context;
use catalog_search::catalog::types::Catalog;
use catalog_search::config::Config;
use catalog_search::server::{router, serve};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    // 1. Catalog (must finish before we accept connections):
    let catalog = Catalog::load(&config.data, config.load_options())
        .with_context(|| format!("failed to load catalog from {}", config.data.display()))?;

    // 2. HTTP Router:
    let app = router(Arc::new(catalog), config.search_settings());

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("Listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    serve(listener, app).await?;

    Ok(())
}
