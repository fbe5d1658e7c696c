pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Message used for every error that is not classified
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Prefix of the aggregated validation message
pub const VALIDATION_PREFIX: &str = "Validation error: ";

/// Body of every non-2xx response.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "CONFLICT",
///   "message": "Email already exists: a@x.com",
///   "timestamp": "2026-10-16T10:00:00Z",
///   "errorCode": "EMAIL_ALREADY_EXISTS"
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// HTTP status name, e.g. `NOT_FOUND`
    #[serde(serialize_with = "serialize_status")]
    #[schema(value_type = String, example = "CONFLICT")]
    pub status: StatusCode,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub error_code: ErrorCode,
}

impl ApiError {
    /// Error body stamped with the current time, status taken from `code`
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: code.status(),
            message: message.into(),
            timestamp: Utc::now(),
            error_code: code,
        }
    }

    /// 400 `VALIDATION_ERROR` with the standard prefix
    pub fn validation(detail: impl AsRef<str>) -> Self {
        Self::new(
            ErrorCode::ValidationError,
            format!("{VALIDATION_PREFIX}{}", detail.as_ref()),
        )
    }

    /// Generic 500 that carries no detail
    pub fn internal() -> Self {
        Self::new(
            ErrorCode::InternalServerError,
            INTERNAL_SERVER_ERROR_MESSAGE,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Serializes a status as its reason phrase in SCREAMING_SNAKE_CASE
fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&status_name(*status))
}

/// `409` -> `CONFLICT`, `500` -> `INTERNAL_SERVER_ERROR`
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
        None => status.as_str().to_string(),
    }
}

/// Joins every field message into one string, fields in name order.
///
/// Messages without an explicit `message` attribute fall back to the
/// validator code (`length`, `email`, ...).
pub fn validation_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
