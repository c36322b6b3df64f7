use std::sync::Arc;

use inkflow_db::store::ProjectStore;
use inkflow_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Project storage backend, chosen once at startup.
    pub projects: Arc<dyn ProjectStore>,
    /// Database pool when persistent storage is configured. Users and the
    /// dashboard user count need it; everything else goes through `projects`.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
