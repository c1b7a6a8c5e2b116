// Transaction Entry Normalizer - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use txn_normalizer::server::{create_router, ADDR_ENV, DEFAULT_ADDR};
use txn_normalizer::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // Catalog is loaded once and shared read-only
    let catalog = Catalog::from_env().context("Failed to load catalog")?;
    info!(
        categories = catalog.categories().count(),
        keywords = catalog.lexicon().keyword_count(),
        "Catalog ready"
    );

    let app = create_router(Arc::new(catalog));

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("API: http://{}/api/classify?text=...", addr);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
