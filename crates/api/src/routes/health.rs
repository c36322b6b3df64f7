use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use inkflow_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Active project storage backend (`postgres` or `memory`).
    pub storage: &'static str,
}

/// GET /api/health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "InkFlow API is running",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        storage: state.projects.backend_name(),
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
