//! UI-facing project representation and creation defaults.
//!
//! [`ProjectView`] is what the API returns. Its `status`, `progress` and
//! `published` fields are always computed from `storage_status` via
//! [`crate::project_status`]; the storage layer never persists them.

use serde::Serialize;

use crate::project_status::{self, UiStatus};
use crate::types::{DbId, Timestamp};

/// Title used when a project is created without one.
pub const DEFAULT_TITLE: &str = "Untitled Project";

/// Project type used when none is stored.
pub const DEFAULT_TYPE: &str = "book";

/// Writing style assigned by the demo (in-memory) entry point.
pub const DEMO_WRITING_STYLE: &str = "Professional";

/// A project as presented to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DbId,
    pub title: String,
    pub status: UiStatus,
    pub progress: u8,
    /// The persisted status this view was derived from.
    pub storage_status: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub writing_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<&'static str>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Storage-form fields a [`ProjectView`] is derived from.
///
/// Borrowed so each backend can build views straight from its own record
/// type without an intermediate allocation.
#[derive(Debug, Clone, Copy)]
pub struct StoredProject<'a> {
    pub id: DbId,
    pub title: &'a str,
    pub storage_status: &'a str,
    pub project_type: Option<&'a str>,
    pub writing_style: Option<&'a str>,
    pub file_url: Option<&'a str>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectView {
    /// Derive the UI view of a stored project.
    pub fn from_stored(stored: StoredProject<'_>) -> Self {
        let ui = project_status::to_ui(stored.storage_status);
        Self {
            id: stored.id,
            title: stored.title.to_string(),
            status: ui.status,
            progress: ui.progress,
            storage_status: stored.storage_status.to_string(),
            project_type: stored.project_type.unwrap_or(DEFAULT_TYPE).to_string(),
            writing_style: stored.writing_style.map(String::from),
            file_url: stored.file_url.map(String::from),
            published: project_status::published_hint(stored.storage_status),
            user_id: stored.user_id,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// Resolve the title for a new project.
pub fn title_or_default(title: Option<&str>) -> String {
    title
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

/// Resolve the project type for a new project.
pub fn type_or_default(project_type: Option<&str>) -> String {
    project_type
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TYPE)
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
