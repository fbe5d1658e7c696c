use axum::response::{IntoResponse, Response};
use axum_helpers::{ApiError, ErrorCode};
use domain_notifications::NotificationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("User not found with id: {0}")]
    NotFound(i64),

    /// Detail is logged, never returned
    #[error("Error updating user")]
    UpdateFailed(String),

    #[error("Error deleting user")]
    DeleteFailed(String),

    #[error("Error accessing user data")]
    DataAccess(String),

    /// Joined field messages
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User not found with email: {0}")]
    UsernameNotFound(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<NotificationError> for UserError {
    fn from(err: NotificationError) -> Self {
        UserError::Notification(err.to_string())
    }
}

impl UserError {
    /// Error code reported in the response body
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::EmailAlreadyExists(_) => ErrorCode::EmailAlreadyExists,
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::UpdateFailed(_) => ErrorCode::UserUpdateError,
            UserError::DeleteFailed(_) => ErrorCode::UserDeleteError,
            UserError::DataAccess(_) => ErrorCode::UserDataAccessError,
            UserError::Validation(_) => ErrorCode::ValidationError,
            UserError::UsernameNotFound(_)
            | UserError::PasswordHash(_)
            | UserError::Notification(_)
            | UserError::Internal(_) => ErrorCode::InternalServerError,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let code = self.code();
        let body = match &self {
            UserError::EmailAlreadyExists(_) | UserError::NotFound(_) => {
                tracing::info!(error_code = code.code(), "{}", self);
                ApiError::new(code, self.to_string())
            }
            UserError::Validation(msg) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", msg);
                ApiError::validation(msg)
            }
            UserError::UpdateFailed(detail)
            | UserError::DeleteFailed(detail)
            | UserError::DataAccess(detail) => {
                tracing::error!(error_code = code.code(), detail = %detail, "{}", self);
                ApiError::new(code, self.to_string())
            }
            UserError::UsernameNotFound(_)
            | UserError::PasswordHash(_)
            | UserError::Notification(_)
            | UserError::Internal(_) => {
                tracing::error!(error_code = code.code(), "Unhandled error: {}", self);
                ApiError::internal()
            }
        };

        body.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: UserError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(UserError::EmailAlreadyExists("a@x.com".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(UserError::NotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(UserError::UpdateFailed("boom".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(UserError::DeleteFailed("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(UserError::DataAccess("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(UserError::Validation("Invalid email format".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(UserError::Notification("smtp down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            UserError::EmailAlreadyExists("a@x.com".into()).to_string(),
            "Email already exists: a@x.com"
        );
        assert_eq!(
            UserError::NotFound(42).to_string(),
            "User not found with id: 42"
        );
        assert_eq!(
            UserError::UpdateFailed("constraint".into()).to_string(),
            "Error updating user"
        );
        assert_eq!(
            UserError::DeleteFailed("io".into()).to_string(),
            "Error deleting user"
        );
        assert_eq!(
            UserError::DataAccess("io".into()).to_string(),
            "Error accessing user data"
        );
    }

    #[test]
    fn test_unclassified_errors_share_code() {
        for err in [
            UserError::PasswordHash("x".into()),
            UserError::Notification("x".into()),
            UserError::Internal("x".into()),
        ] {
            assert_eq!(err.code(), ErrorCode::InternalServerError);
        }
    }
}
