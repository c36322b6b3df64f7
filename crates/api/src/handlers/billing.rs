//! Handlers for the plan catalog and (mock) checkout sessions.

use axum::extract::State;
use axum::Json;
use inkflow_core::pricing::{self, Plan};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub plans: &'static [Plan],
    pub publishable_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub plan_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: String,
}

/// GET /api/pricing
pub async fn pricing(State(state): State<AppState>) -> Json<PricingResponse> {
    Json(PricingResponse {
        plans: pricing::plans(),
        publishable_key: state.config.stripe_publishable_key.clone(),
    })
}

/// POST /api/create-checkout-session
pub async fn create_checkout_session(
    Json(input): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    let session = pricing::create_checkout_session(&input.plan_id)?;
    tracing::info!(
        plan = session.plan_name,
        session_id = %session.id,
        "Created mock checkout session",
    );
    Ok(Json(CheckoutResponse {
        session_id: session.id,
    }))
}
