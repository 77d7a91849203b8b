// HTTP request handlers
use crate::domain::error::TripError;
use crate::domain::trip::{LocationUpdate, TelemetryUpdate, TripSnapshot};
use crate::presentation::app_state::AppState;
use crate::presentation::payload::{LocationPayload, TelemetryPayload, decode_body};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Speed/distance reading from the sensor unit
pub async fn post_telemetry(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<StatusResponse>, TripError> {
    let update = TelemetryUpdate::try_from(decode_body::<TelemetryPayload>(&body)?)?;
    state.trip_service.record_telemetry(update).await?;
    Ok(Json(StatusResponse { status: "success" }))
}

/// GPS fix from the sensor unit or the viewer's browser
pub async fn post_location(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<StatusResponse>, TripError> {
    let update = LocationUpdate::try_from(decode_body::<LocationPayload>(&body)?)?;
    state.trip_service.record_location(update).await?;
    Ok(Json(StatusResponse { status: "success" }))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<TripSnapshot> {
    Json(state.trip_service.status().await)
}

pub async fn post_reset(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    state.trip_service.reset_trip().await;
    Json(StatusResponse { status: "reset" })
}
