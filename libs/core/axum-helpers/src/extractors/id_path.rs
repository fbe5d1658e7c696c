//! Integer path parameter extractor.

use crate::errors::ApiError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a numeric `{id}` path segment.
///
/// A segment that is not a valid `i64` is rejected with 400
/// `VALIDATION_ERROR` instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()).into_response())?;

        raw.parse::<i64>().map(IdPath).map_err(|_| {
            ApiError::validation(format!("id must be an integer, got '{raw}'")).into_response()
        })
    }
}
