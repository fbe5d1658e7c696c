//! Type-safe error codes for API responses.
//!
//! Single source of truth for the `errorCode` field of every error body the
//! service returns. Each code has:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default HTTP status
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::EmailAlreadyExists;
//! assert_eq!(code.as_str(), "EMAIL_ALREADY_EXISTS");
//! assert_eq!(code.code(), 1101);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request errors (1000s)
    /// Request body or path failed validation
    ValidationError,

    /// No route matches the request
    ResourceNotFound,

    // User errors (1100s)
    /// Another account already uses the email
    EmailAlreadyExists,

    /// No account with the requested id
    UserNotFound,

    /// Merging or saving an update failed
    UserUpdateError,

    /// Removing an account failed
    UserDeleteError,

    /// Reading accounts from the store failed
    UserDataAccessError,

    // Server errors (2000s)
    /// Anything not classified above
    InternalServerError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier used in the `errorCode` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserUpdateError => "USER_UPDATE_ERROR",
            Self::UserDeleteError => "USER_DELETE_ERROR",
            Self::UserDataAccessError => "USER_DATA_ACCESS_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// Ranges:
    /// - 1000-1099: request errors
    /// - 1100-1199: user account errors
    /// - 2000-2999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::ResourceNotFound => 1002,

            Self::EmailAlreadyExists => 1101,
            Self::UserNotFound => 1102,
            Self::UserUpdateError => 1103,
            Self::UserDeleteError => 1104,
            Self::UserDataAccessError => 1105,

            Self::InternalServerError => 2001,
        }
    }

    /// HTTP status the code is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::UserUpdateError => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::UserDeleteError | Self::UserDataAccessError | Self::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::UserNotFound.as_str(), "USER_NOT_FOUND");
        assert_eq!(
            ErrorCode::UserDataAccessError.as_str(),
            "USER_DATA_ACCESS_ERROR"
        );
    }

    #[test]
    fn test_error_code_statuses() {
        assert_eq!(ErrorCode::EmailAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UserUpdateError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::UserDeleteError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::UserDataAccessError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ResourceNotFound.to_string(), "RESOURCE_NOT_FOUND");
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::ResourceNotFound,
            ErrorCode::EmailAlreadyExists,
            ErrorCode::UserNotFound,
            ErrorCode::UserUpdateError,
            ErrorCode::UserDeleteError,
            ErrorCode::UserDataAccessError,
            ErrorCode::InternalServerError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
