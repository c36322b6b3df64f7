//! Project status mapping between the storage vocabulary and the UI vocabulary.
//!
//! The storage status (`draft`, `processing`, `completed`) is the only value
//! that is persisted. The UI status (`Draft`, `In Progress`, `Completed`) and
//! the progress percentage are derived from it on every read and are never
//! written back on their own.
//!
//! The two directions are asymmetric:
//!
//! - [`to_ui`] never fails. Unrecognized storage values resolve to
//!   `In Progress` with progress 0 and the projection is flagged with
//!   [`UiProjection::is_fallback`].
//! - [`to_storage`] translates the three exact UI labels and passes every
//!   other value through unchanged, so callers may submit either vocabulary.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Storage status values (the `projects.status` column).
pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PROCESSING: &str = "processing";
pub const STATUS_COMPLETED: &str = "completed";

/// All canonical storage status values.
pub const VALID_STORAGE_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PROCESSING, STATUS_COMPLETED];

/// UI status labels.
pub const LABEL_DRAFT: &str = "Draft";
pub const LABEL_IN_PROGRESS: &str = "In Progress";
pub const LABEL_COMPLETED: &str = "Completed";

/// Progress shown for each storage status.
///
/// `PROGRESS_PROCESSING` is a fixed placeholder, not a measured quantity.
pub const PROGRESS_DRAFT: u8 = 0;
pub const PROGRESS_PROCESSING: u8 = 67;
pub const PROGRESS_COMPLETED: u8 = 100;

/// Progress reported for unrecognized storage values.
pub const PROGRESS_FALLBACK: u8 = 0;

/// Display hint attached to completed projects.
pub const PUBLISHED_READY: &str = "Ready for Publishing";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Canonical persisted project status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageStatus {
    Draft,
    Processing,
    Completed,
}

impl StorageStatus {
    /// Convert from a database string value. Returns `None` for anything
    /// outside the canonical set.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            STATUS_DRAFT => Some(Self::Draft),
            STATUS_PROCESSING => Some(Self::Processing),
            STATUS_COMPLETED => Some(Self::Completed),
            _ => None,
        }
    }

    /// Convert to the database string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Processing => STATUS_PROCESSING,
            Self::Completed => STATUS_COMPLETED,
        }
    }
}

/// Human-facing project status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiStatus {
    #[serde(rename = "Draft")]
    Draft,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl UiStatus {
    /// The exact label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => LABEL_DRAFT,
            Self::InProgress => LABEL_IN_PROGRESS,
            Self::Completed => LABEL_COMPLETED,
        }
    }

    /// Parse an exact UI label. Matching is case-sensitive.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            LABEL_DRAFT => Some(Self::Draft),
            LABEL_IN_PROGRESS => Some(Self::InProgress),
            LABEL_COMPLETED => Some(Self::Completed),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// UI-facing view of a storage status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiProjection {
    pub status: UiStatus,
    pub progress: u8,
    /// `true` when the storage value was not canonical and the permissive
    /// default was applied.
    pub is_fallback: bool,
}

/// Map a persisted storage status to its UI status and progress.
pub fn to_ui(storage_status: &str) -> UiProjection {
    match StorageStatus::from_str_value(storage_status) {
        Some(status) => project(status),
        None => UiProjection {
            status: UiStatus::InProgress,
            progress: PROGRESS_FALLBACK,
            is_fallback: true,
        },
    }
}

fn project(status: StorageStatus) -> UiProjection {
    let (status, progress) = match status {
        StorageStatus::Draft => (UiStatus::Draft, PROGRESS_DRAFT),
        StorageStatus::Processing => (UiStatus::InProgress, PROGRESS_PROCESSING),
        StorageStatus::Completed => (UiStatus::Completed, PROGRESS_COMPLETED),
    };
    UiProjection {
        status,
        progress,
        is_fallback: false,
    }
}

/// Translate a UI label into its storage status.
///
/// Anything that is not one of the three exact labels is returned as-is,
/// which lets already-translated storage values flow through updates.
pub fn to_storage(status: &str) -> &str {
    match UiStatus::from_label(status) {
        Some(UiStatus::Completed) => STATUS_COMPLETED,
        Some(UiStatus::InProgress) => STATUS_PROCESSING,
        Some(UiStatus::Draft) => STATUS_DRAFT,
        None => status,
    }
}

/// Display hint for the `published` field of a project view.
pub fn published_hint(storage_status: &str) -> Option<&'static str> {
    (storage_status == STATUS_COMPLETED).then_some(PUBLISHED_READY)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
