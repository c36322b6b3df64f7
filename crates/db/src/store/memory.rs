use async_trait::async_trait;
use chrono::Utc;
use inkflow_core::error::CoreError;
use inkflow_core::project::{title_or_default, type_or_default, ProjectView, DEMO_WRITING_STYLE};
use inkflow_core::project_status::{LABEL_IN_PROGRESS, STATUS_COMPLETED, STATUS_PROCESSING};
use inkflow_core::types::DbId;
use tokio::sync::RwLock;

use super::{not_found, ProjectStore};
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Raw status given to projects created through the in-memory store.
///
/// The demo entry point has always shown new projects as `In Progress` at
/// 0%. It stores the untranslated label, which the read mapping resolves to
/// exactly that pair. The Postgres store starts new projects as `draft`.
pub const DEMO_INITIAL_STATUS: &str = LABEL_IN_PROGRESS;

struct MemoryState {
    projects: Vec<Project>,
    next_id: DbId,
}

/// Project store held in process memory.
///
/// Each operation is atomic under the lock; there is no isolation across
/// operations. Records are returned in insertion order.
pub struct InMemoryProjectStore {
    state: RwLock<MemoryState>,
}

impl InMemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                projects: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store seeded with the two demo projects.
    pub fn with_demo_data() -> Self {
        let now = Utc::now();
        let seed = |id: DbId, title: &str, status: &str| Project {
            id,
            user_id: None,
            title: title.to_string(),
            status: status.to_string(),
            project_type: Some("book".to_string()),
            writing_style: None,
            file_url: None,
            created_at: now,
            updated_at: now,
        };
        let projects = vec![
            seed(1, "The Art of AI Writing", STATUS_PROCESSING),
            seed(2, "Marketing Mastery Guide", STATUS_COMPLETED),
        ];
        Self {
            state: RwLock::new(MemoryState {
                next_id: projects.len() as DbId + 1,
                projects,
            }),
        }
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, owner_id: Option<DbId>) -> Result<Vec<ProjectView>, CoreError> {
        let state = self.state.read().await;
        Ok(state
            .projects
            .iter()
            .filter(|p| owner_id.is_none() || p.user_id == owner_id)
            .map(Project::to_view)
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ProjectView>, CoreError> {
        let state = self.state.read().await;
        Ok(state.projects.iter().find(|p| p.id == id).map(Project::to_view))
    }

    async fn create(
        &self,
        input: &CreateProject,
        owner_id: Option<DbId>,
    ) -> Result<ProjectView, CoreError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now();
        let project = Project {
            id,
            user_id: owner_id,
            title: title_or_default(input.title.as_deref()),
            status: DEMO_INITIAL_STATUS.to_string(),
            project_type: Some(type_or_default(input.project_type.as_deref())),
            writing_style: Some(
                input
                    .writing_style
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(DEMO_WRITING_STYLE)
                    .to_string(),
            ),
            file_url: None,
            created_at: now,
            updated_at: now,
        };
        let view = project.to_view();
        state.projects.push(project);

        tracing::info!(project_id = id, owner_id = ?owner_id, "Project created (in-memory)");
        Ok(view)
    }

    async fn update(&self, id: DbId, patch: &UpdateProject) -> Result<ProjectView, CoreError> {
        let mut state = self.state.write().await;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(title) = &patch.title {
            project.title = title.clone();
        }
        if let Some(project_type) = &patch.project_type {
            project.project_type = Some(project_type.clone());
        }
        if let Some(writing_style) = &patch.writing_style {
            project.writing_style = Some(writing_style.clone());
        }
        if let Some(status) = patch.storage_status() {
            project.status = status.to_string();
        }
        if let Some(file_url) = &patch.file_url {
            project.file_url = Some(file_url.clone());
        }
        project.updated_at = Utc::now();

        Ok(project.to_view())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use inkflow_core::project_status::UiStatus;

    use super::*;

    fn titled(title: &str) -> CreateProject {
        CreateProject {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_without_arguments_applies_demo_defaults() {
        let store = InMemoryProjectStore::new();
        let project = store.create(&CreateProject::default(), None).await.unwrap();

        assert_eq!(project.title, "Untitled Project");
        assert_eq!(project.status, UiStatus::InProgress);
        assert_eq!(project.progress, 0);
        assert_eq!(project.project_type, "book");
        assert_eq!(project.writing_style.as_deref(), Some("Professional"));
        assert_eq!(project.user_id, None);
    }

    #[tokio::test]
    async fn create_with_empty_writing_style_uses_default() {
        let store = InMemoryProjectStore::new();
        let input = CreateProject {
            writing_style: Some(String::new()),
            ..Default::default()
        };
        let project = store.create(&input, None).await.unwrap();

        assert_eq!(project.writing_style.as_deref(), Some("Professional"));
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = InMemoryProjectStore::new();
        let a = store.create(&titled("A"), None).await.unwrap();
        let b = store.create(&titled("B"), None).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn demo_data_ids_continue_after_seed() {
        let store = InMemoryProjectStore::with_demo_data();
        let created = store.create(&titled("Third"), None).await.unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn demo_data_derives_status_from_storage_form() {
        let store = InMemoryProjectStore::with_demo_data();
        let projects = store.list(None).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].status, UiStatus::InProgress);
        assert_eq!(projects[0].progress, 67);
        assert_eq!(projects[1].status, UiStatus::Completed);
        assert_eq!(projects[1].progress, 100);
        assert_eq!(projects[1].published, Some("Ready for Publishing"));
    }

    #[tokio::test]
    async fn list_keeps_insertion_order_and_filters_by_owner() {
        let store = InMemoryProjectStore::new();
        store.create(&titled("mine-1"), Some(10)).await.unwrap();
        store.create(&titled("theirs"), Some(20)).await.unwrap();
        store.create(&titled("mine-2"), Some(10)).await.unwrap();

        let all: Vec<_> = store.list(None).await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(all, ["mine-1", "theirs", "mine-2"]);

        let mine: Vec<_> = store.list(Some(10)).await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(mine, ["mine-1", "mine-2"]);
    }

    #[tokio::test]
    async fn list_for_unknown_owner_is_empty() {
        let store = InMemoryProjectStore::with_demo_data();
        assert!(store.list(Some(999)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_ui_label_persists_storage_status() {
        let store = InMemoryProjectStore::new();
        let created = store.create(&CreateProject::default(), None).await.unwrap();

        let patch = UpdateProject {
            status: Some("Completed".to_string()),
            ..Default::default()
        };
        let updated = store.update(created.id, &patch).await.unwrap();

        assert_eq!(updated.storage_status, "completed");
        assert_eq!(updated.status, UiStatus::Completed);
        assert_eq!(updated.progress, 100);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_leaves_unpatched_fields_alone() {
        let store = InMemoryProjectStore::new();
        let created = store.create(&titled("Keep"), None).await.unwrap();

        let patch = UpdateProject {
            writing_style: Some("Academic".to_string()),
            ..Default::default()
        };
        let updated = store.update(created.id, &patch).await.unwrap();

        assert_eq!(updated.title, "Keep");
        assert_eq!(updated.writing_style.as_deref(), Some("Academic"));
        assert_eq!(updated.storage_status, DEMO_INITIAL_STATUS);
    }

    #[tokio::test]
    async fn update_missing_project_is_not_found() {
        let store = InMemoryProjectStore::with_demo_data();
        let before = store.list(None).await.unwrap();

        let patch = UpdateProject {
            title: Some("ghost".to_string()),
            ..Default::default()
        };
        assert_matches!(
            store.update(404, &patch).await,
            Err(CoreError::NotFound { entity: "Project", id: 404 })
        );
        assert_eq!(store.list(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing() {
        let store = InMemoryProjectStore::with_demo_data();
        assert!(store.find_by_id(1).await.unwrap().is_some());
        assert!(store.find_by_id(42).await.unwrap().is_none());
    }
}
