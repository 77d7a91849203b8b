// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::trip_service::TripService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_store::InMemoryTripStore;
use crate::infrastructure::tls::load_rustls_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,tower_http=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = load_app_config()?;
    let addr = config.server.socket_addr()?;
    let tls_config = load_rustls_config(&config.tls).await?;

    // Create store (infrastructure layer)
    let store = Arc::new(InMemoryTripStore::new());

    // Create services (application layer)
    let trip_service = TripService::new(store);

    // Create application state
    let state = Arc::new(AppState { trip_service });

    // Build router (presentation layer)
    let router = build_router(state, &config.static_dir);

    tracing::info!("Starting trip-telemetry service on https://{}", addr);

    axum_server::bind_rustls(addr, tls_config)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
