//! Handlers for the `/users` resource. Available only with persistent storage.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inkflow_core::error::CoreError;
use inkflow_core::types::DbId;
use inkflow_db::models::user::{CreateUser, User};
use inkflow_db::repositories::UserRepo;
use inkflow_db::store::guarded;
use inkflow_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn require_pool(state: &AppState) -> Result<&DbPool, AppError> {
    state.pool.as_ref().ok_or_else(|| {
        AppError::Core(CoreError::StorageUnavailable(
            "persistent storage is not configured".into(),
        ))
    })
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    if input.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".into()));
    }
    let pool = require_pool(&state)?;
    let user = guarded(
        "users.create",
        state.config.storage_timeout(),
        UserRepo::create(pool, &input),
    )
    .await?;
    tracing::info!(user_id = user.id, plan = %user.subscription_plan, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let pool = require_pool(&state)?;
    let user = guarded(
        "users.find_by_id",
        state.config.storage_timeout(),
        UserRepo::find_by_id(pool, id),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}
