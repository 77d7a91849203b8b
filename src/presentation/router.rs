// Route table for the trip API and the static viewer
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_status, health_check, post_location, post_reset, post_telemetry,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/data", post(post_telemetry))
        .route("/api/location", post(post_location))
        .route("/api/status", get(get_status))
        .route("/api/reset", post(post_reset))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
