//! Error types for the notifications domain.

use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur while sending mail.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Email provider error.
    #[error("Email provider error: {0}")]
    ProviderError(String),
}

impl From<lettre::address::AddressError> for NotificationError {
    fn from(err: lettre::address::AddressError) -> Self {
        NotificationError::InvalidEmail(err.to_string())
    }
}

impl From<lettre::error::Error> for NotificationError {
    fn from(err: lettre::error::Error) -> Self {
        NotificationError::ProviderError(format!("Failed to build email message: {}", err))
    }
}
