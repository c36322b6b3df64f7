//! Owner scoping extractor for Axum handlers.
//!
//! There is no authentication layer. The owner of a request is read from the
//! `userId` query parameter, falling back to the `user-id` header. When
//! neither is present the request is unscoped and sees every project.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use inkflow_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// Header consulted when the query string carries no owner.
pub const OWNER_HEADER: &str = "user-id";

/// The owner a request is scoped to, if any.
///
/// ```ignore
/// async fn my_handler(OwnerScope(owner_id): OwnerScope) -> AppResult<Json<()>> {
///     tracing::debug!(owner_id = ?owner_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerScope(pub Option<DbId>);

#[derive(Debug, Deserialize)]
struct OwnerQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

impl<S> FromRequestParts<S> for OwnerScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<OwnerQuery>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let from_query = query.user_id.filter(|v| !v.is_empty());

        let raw = match from_query {
            Some(value) => Some(value),
            None => parts
                .headers
                .get(OWNER_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        };

        match raw {
            None => Ok(OwnerScope(None)),
            Some(value) => value
                .parse::<DbId>()
                .map(|id| OwnerScope(Some(id)))
                .map_err(|_| AppError::BadRequest(format!("Invalid owner id '{value}'"))),
        }
    }
}
