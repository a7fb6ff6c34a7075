//! `transfer-market` server.
//!
//! Loads settings, installs tracing, opens the configured store and serves
//! the REST API until interrupted.

use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use transfer_market::api::rest::{AppState, create_router};
use transfer_market::application::TransferMarket;
use transfer_market::infrastructure::config::{DatabaseConfig, Settings};
use transfer_market::infrastructure::persistence::{
    InMemoryMarketStore, MarketStore, PostgresMarketStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config_path = std::env::args().nth(1);
    let settings = Settings::load(config_path.as_deref()).context("failed to load settings")?;
    settings
        .logging
        .init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")?;

    info!(version = env!("CARGO_PKG_VERSION"), "transfer-market starting");

    let store = open_store(&settings.database).await?;
    let router = create_router(AppState::new(TransferMarket::new(store)));

    let address = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %address, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("transfer-market stopped");
    Ok(())
}

async fn open_store(database: &DatabaseConfig) -> anyhow::Result<Arc<dyn MarketStore>> {
    let Some(url) = database.url.as_deref() else {
        info!("no database configured, using in-memory store");
        return Ok(Arc::new(InMemoryMarketStore::new()));
    };

    let store =
        PostgresMarketStore::connect(url, database.max_connections, database.acquire_timeout())
            .await
            .context("failed to connect to database")?;
    if database.run_migrations {
        store.migrate().await.context("failed to migrate schema")?;
    }
    info!(max_connections = database.max_connections, "connected to postgres");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
