use std::time::Duration;

use async_trait::async_trait;
use inkflow_core::error::CoreError;
use inkflow_core::project::ProjectView;
use inkflow_core::types::DbId;

use super::{guarded, not_found, ProjectStore};
use crate::models::project::{CreateProject, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Postgres-backed project store. Every call is bounded by `timeout`.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
    timeout: Duration,
}

impl PgProjectStore {
    pub fn new(pool: DbPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, owner_id: Option<DbId>) -> Result<Vec<ProjectView>, CoreError> {
        let rows = guarded(
            "projects.list",
            self.timeout,
            ProjectRepo::list(&self.pool, owner_id),
        )
        .await?;
        Ok(rows.iter().map(|row| row.to_view()).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectView>, CoreError> {
        let row = guarded(
            "projects.find_by_id",
            self.timeout,
            ProjectRepo::find_by_id(&self.pool, id),
        )
        .await?;
        Ok(row.map(|row| row.to_view()))
    }

    async fn create(
        &self,
        input: &CreateProject,
        owner_id: Option<DbId>,
    ) -> Result<ProjectView, CoreError> {
        let row = guarded(
            "projects.create",
            self.timeout,
            ProjectRepo::create(&self.pool, input, owner_id),
        )
        .await?;
        tracing::info!(project_id = row.id, owner_id = ?owner_id, "Project created");
        Ok(row.to_view())
    }

    async fn update(&self, id: DbId, patch: &UpdateProject) -> Result<ProjectView, CoreError> {
        let row = guarded(
            "projects.update",
            self.timeout,
            ProjectRepo::update(&self.pool, id, patch),
        )
        .await?
        .ok_or_else(|| not_found(id))?;
        Ok(row.to_view())
    }
}
