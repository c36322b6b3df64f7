//! Dashboard summary statistics over a collection of projects.

use serde::Serialize;

use crate::project::ProjectView;
use crate::project_status::UiStatus;

/// Project counts shown on the dashboard.
///
/// `Draft` projects count toward `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

/// Count projects by UI status.
pub fn summarize(projects: &[ProjectView]) -> DashboardSummary {
    projects
        .iter()
        .fold(DashboardSummary::default(), |mut acc, project| {
            acc.total += 1;
            match project.status {
                UiStatus::Completed => acc.completed += 1,
                UiStatus::InProgress => acc.in_progress += 1,
                UiStatus::Draft => {}
            }
            acc
        })
}
