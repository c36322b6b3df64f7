use axum::routing::{get, post};
use axum::Router;

use crate::handlers::billing;
use crate::state::AppState;

/// ```text
/// GET    /pricing                   -> pricing
/// POST   /create-checkout-session   -> create_checkout_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pricing", get(billing::pricing))
        .route(
            "/create-checkout-session",
            post(billing::create_checkout_session),
        )
}
