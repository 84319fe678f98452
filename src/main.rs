/// Cosmic Explorer mission service entry point
mod clients;
mod config;
mod domain;
mod errors;
mod filters;
mod handlers;
mod optimistic;
mod routes;
mod services;
mod utils;

use crate::clients::{CatalogClient, HttpClient, UpdatesClient};
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::{CatalogService, LikeService};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!(
        "Configuration loaded (api: {}, card size: {:?}, images: {})",
        config.api_base_url, config.display.card_size, config.display.show_images
    );

    // Initialize clients
    let http_client = HttpClient::new(config.http_timeout_seconds)?;
    let catalog_client = CatalogClient::new(http_client.clone(), config.api_base_url.clone());
    let updates_client = UpdatesClient::new(http_client, config.api_base_url.clone());

    // Initialize services
    let catalog_service = Arc::new(CatalogService::new(catalog_client));
    let like_service = Arc::new(LikeService::new(updates_client));

    // Initialize application state
    let state = AppState {
        catalog_service: catalog_service.clone(),
        like_service,
        display: config.display,
    };

    // Start background tasks
    start_catalog_refresh(config.catalog_refresh_seconds, catalog_service);

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("cosmic_explorer service listening on {}", config.listen_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Keep the catalog snapshot fresh. Fetch failures are logged by the service
/// and never stop the loop.
fn start_catalog_refresh(interval: u64, catalog_service: Arc<CatalogService>) {
    tokio::spawn(async move {
        info!("Starting catalog refresh task (interval: {}s)", interval);
        loop {
            catalog_service.refresh().await;
            tokio::time::sleep(Duration::from_secs(interval)).await;
        }
    });
}
