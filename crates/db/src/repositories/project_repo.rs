//! Repository for the `projects` table.

use inkflow_core::project::{title_or_default, type_or_default};
use inkflow_core::project_status::STATUS_DRAFT;
use inkflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, title, status, type, writing_style, file_url, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in `draft` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        user_id: Option<DbId>,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, status, type, writing_style, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(title_or_default(input.title.as_deref()))
            .bind(STATUS_DRAFT)
            .bind(type_or_default(input.project_type.as_deref()))
            .bind(&input.writing_style)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects ordered by most recently created first.
    ///
    /// When `user_id` is `Some`, only that owner's projects are returned.
    pub async fn list(pool: &PgPool, user_id: Option<DbId>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::BIGINT IS NULL OR user_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always refreshed. UI status labels are translated to
    /// storage values before writing.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                type = COALESCE($3, type),
                writing_style = COALESCE($4, writing_style),
                status = COALESCE($5, status),
                file_url = COALESCE($6, file_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.project_type)
            .bind(&input.writing_style)
            .bind(input.storage_status())
            .bind(&input.file_url)
            .fetch_optional(pool)
            .await
    }
}
