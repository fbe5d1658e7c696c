use axum::response::{IntoResponse, Response};

use super::{ApiError, ErrorCode};

/// Fallback for routes that match nothing.
pub async fn not_found() -> Response {
    ApiError::new(
        ErrorCode::ResourceNotFound,
        "The requested resource was not found",
    )
    .into_response()
}
