//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inkflow_core::error::CoreError;
use inkflow_core::project::ProjectView;
use inkflow_core::types::DbId;
use inkflow_db::models::project::{CreateProject, UpdateProject};
use inkflow_db::store::PROJECT_ENTITY;

use crate::error::{AppError, AppResult};
use crate::middleware::owner::OwnerScope;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    OwnerScope(owner_id): OwnerScope,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectView>)> {
    let project = state.projects.create(&input, owner_id).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    OwnerScope(owner_id): OwnerScope,
) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = state.projects.list(owner_id).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectView>> {
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: PROJECT_ENTITY,
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectView>> {
    let project = state.projects.update(id, &input).await?;
    tracing::debug!(project_id = id, status = %project.storage_status, "Project updated");
    Ok(Json(project))
}
