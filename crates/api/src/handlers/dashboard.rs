//! Handler for the dashboard: the caller's projects plus summary counts.

use axum::extract::State;
use axum::Json;
use inkflow_core::dashboard::summarize;
use inkflow_core::project::ProjectView;
use inkflow_db::repositories::UserRepo;
use inkflow_db::store::guarded;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::owner::OwnerScope;
use crate::state::AppState;

/// Summary counts shown on the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_books: usize,
    pub completed_books: usize,
    pub in_progress_books: usize,
    pub total_users: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub projects: Vec<ProjectView>,
    pub stats: DashboardStats,
}

/// GET /api/dashboard
///
/// A failed user count is logged and reported as zero; a failed project
/// listing fails the request.
pub async fn get_dashboard(
    State(state): State<AppState>,
    OwnerScope(owner_id): OwnerScope,
) -> AppResult<Json<DashboardResponse>> {
    let projects = state.projects.list(owner_id).await?;
    let summary = summarize(&projects);

    let total_users = match &state.pool {
        Some(pool) => guarded(
            "users.count",
            state.config.storage_timeout(),
            UserRepo::count(pool),
        )
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Falling back to zero users on dashboard");
            0
        }),
        None => 0,
    };

    Ok(Json(DashboardResponse {
        projects,
        stats: DashboardStats {
            total_books: summary.total,
            completed_books: summary.completed,
            in_progress_books: summary.in_progress,
            total_users,
        },
    }))
}
