//! Ventas Service - sales registration and customer classification.
//!
//! This is the main entry point for the ventas service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ventas_model::NeuralScorer;
use ventas_service::{create_router, AppState, ServiceConfig};
use ventas_store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ventas=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ventas Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        data_path = %config.data_path,
        model_path = %config.model_path,
        "Service configuration loaded"
    );

    // The record store reads lazily; a missing data file is an empty store
    let store = Arc::new(JsonFileStore::new(&config.data_path));

    // The model is loaded once here and passed down; a bad artifact is fatal
    let scorer = Arc::new(NeuralScorer::load(&config.model_path)?);

    let state = AppState::new(store, scorer, config.clone());

    let app = create_router(state);
    tracing::info!("Router configured with all endpoints");

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
