//! Project storage backends.
//!
//! [`ProjectStore`] is implemented by [`PgProjectStore`] (Postgres) and
//! [`InMemoryProjectStore`] (demo data). The API picks one at startup and
//! shares it as `Arc<dyn ProjectStore>`; the choice is never revisited per
//! request. Both backends keep projects in storage form and derive the UI
//! status and progress on every read.

mod memory;
mod postgres;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use inkflow_core::error::CoreError;
use inkflow_core::project::ProjectView;
use inkflow_core::types::DbId;

use crate::models::project::{CreateProject, UpdateProject};

pub use memory::{InMemoryProjectStore, DEMO_INITIAL_STATUS};
pub use postgres::PgProjectStore;

/// Entity name used in `NotFound` errors.
pub const PROJECT_ENTITY: &str = "Project";

/// CRUD over project records.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// List projects, optionally restricted to one owner. An owner with no
    /// projects yields an empty list.
    async fn list(&self, owner_id: Option<DbId>) -> Result<Vec<ProjectView>, CoreError>;

    /// Find a single project.
    async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectView>, CoreError>;

    /// Create a project, applying defaults for missing fields.
    async fn create(
        &self,
        input: &CreateProject,
        owner_id: Option<DbId>,
    ) -> Result<ProjectView, CoreError>;

    /// Apply a patch. Fails with [`CoreError::NotFound`] if `id` does not exist.
    async fn update(&self, id: DbId, patch: &UpdateProject) -> Result<ProjectView, CoreError>;
}

/// Run a database call under a timeout, classifying failures with
/// [`classify_sqlx_error`]. A timeout is [`CoreError::StorageUnavailable`].
pub async fn guarded<T, F>(operation: &'static str, timeout: Duration, call: F) -> Result<T, CoreError>
where
    F: Future<Output = Result<T, sqlx::Error>> + Send,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(classify_sqlx_error(operation, &err)),
        Err(_) => {
            tracing::error!(
                operation,
                timeout_ms = timeout.as_millis() as u64,
                "Storage call timed out",
            );
            Err(CoreError::StorageUnavailable(format!("{operation} timed out")))
        }
    }
}

/// PostgreSQL unique constraint violation.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL foreign key violation.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Classify a sqlx error into a [`CoreError`].
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to `Conflict`.
/// - Foreign key violations map to `Validation`.
/// - Everything else maps to `StorageUnavailable`.
pub fn classify_sqlx_error(operation: &'static str, err: &sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some(PG_UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                tracing::debug!(operation, constraint, "Unique constraint violated");
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
            Some(PG_FOREIGN_KEY_VIOLATION) => {
                tracing::debug!(operation, constraint, "Foreign key violated");
                return CoreError::Validation(format!(
                    "Referenced record does not exist: {constraint}"
                ));
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, operation, "Storage call failed");
    CoreError::StorageUnavailable(format!("{operation} failed"))
}

pub(crate) fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: PROJECT_ENTITY,
        id,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn guarded_passes_success_through() {
        let result = guarded("test.ok", Duration::from_secs(1), async { Ok::<_, sqlx::Error>(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn guarded_maps_database_errors() {
        let result: Result<(), _> = guarded("projects.list", Duration::from_secs(1), async {
            Err(sqlx::Error::PoolTimedOut)
        })
        .await;
        assert_matches!(result, Err(CoreError::StorageUnavailable(msg)) if msg == "projects.list failed");
    }

    #[tokio::test]
    async fn guarded_maps_timeouts() {
        let result: Result<(), _> = guarded("projects.create", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert_matches!(result, Err(CoreError::StorageUnavailable(msg)) if msg == "projects.create timed out");
    }
}
