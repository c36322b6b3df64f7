//! Project entity model and DTOs.

use inkflow_core::project::{ProjectView, StoredProject};
use inkflow_core::project_status::{self, StorageStatus};
use inkflow_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A project row from the `projects` table, in storage form.
///
/// The in-memory store keeps records of the same shape.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub title: String,
    /// Raw storage status. Canonically `draft`, `processing` or `completed`.
    pub status: String,
    #[sqlx(rename = "type")]
    pub project_type: Option<String>,
    pub writing_style: Option<String>,
    pub file_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Derive the UI-facing view of this row.
    pub fn to_view(&self) -> ProjectView {
        if StorageStatus::from_str_value(&self.status).is_none() {
            tracing::debug!(
                project_id = self.id,
                status = %self.status,
                "Unrecognized storage status, defaulting to In Progress",
            );
        }
        ProjectView::from_stored(StoredProject {
            id: self.id,
            title: &self.title,
            storage_status: &self.status,
            project_type: self.project_type.as_deref(),
            writing_style: self.writing_style.as_deref(),
            file_url: self.file_url.as_deref(),
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DTO for creating a new project. Every field is optional; defaults are
/// applied by the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub writing_style: Option<String>,
}

/// DTO for updating an existing project.
///
/// Only these fields are updatable; any other key in the request body is
/// ignored. `status` may be a UI label or a storage value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub writing_style: Option<String>,
    pub status: Option<String>,
    pub file_url: Option<String>,
}

impl UpdateProject {
    /// The status to persist, with UI labels translated to storage values.
    pub fn storage_status(&self) -> Option<&str> {
        self.status.as_deref().map(project_status::to_storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_translates_ui_label() {
        let patch = UpdateProject {
            status: Some("In Progress".into()),
            ..Default::default()
        };
        assert_eq!(patch.storage_status(), Some("processing"));
    }

    #[test]
    fn update_passes_storage_value_through() {
        let patch = UpdateProject {
            status: Some("completed".into()),
            ..Default::default()
        };
        assert_eq!(patch.storage_status(), Some("completed"));
        assert_eq!(UpdateProject::default().storage_status(), None);
    }

    #[test]
    fn update_ignores_unknown_keys() {
        let patch: UpdateProject = serde_json::from_value(serde_json::json!({
            "title": "Renamed",
            "progress": 99,
            "id": 42,
            "writingStyle": "Academic"
        }))
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.writing_style.as_deref(), Some("Academic"));
        assert!(patch.status.is_none());
    }
}
