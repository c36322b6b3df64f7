pub mod billing;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod users;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum::Router;
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          service health
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update
///
/// /dashboard                                       projects + summary stats
///
/// /users                                           create
/// /users/{id}                                      get
///
/// /pricing                                         plan catalog
/// /create-checkout-session                         mock checkout (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .merge(dashboard::router())
        .nest("/users", users::router())
        .merge(billing::router())
}

/// JSON 404 for unmatched paths.
pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "code": "NOT_FOUND",
        })),
    )
}
