//! Email provider implementations.
//!
//! `EmailProvider` is the seam the account service sends through; SMTP
//! delivers for real, the log provider is for local development.

mod logging;
mod smtp;

pub use logging::LogProvider;
pub use smtp::SmtpProvider;

use crate::error::NotificationResult;
use async_trait::async_trait;

/// Represents a sent email with provider-specific message ID.
#[derive(Debug, Clone)]
pub struct SentEmail {
    /// Provider-specific message ID for tracking.
    pub message_id: Option<String>,
    /// Whether the email was accepted for delivery.
    pub accepted: bool,
}

/// Email content ready for sending. The sender comes from the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailContent {
    /// Recipient email address.
    pub to_email: String,
    /// Recipient display name, may be empty.
    pub to_name: String,
    pub subject: String,
    pub text_body: String,
    /// Optional HTML alternative to `text_body`.
    pub html_body: Option<String>,
}

/// Trait for email sending providers.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email.
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail>;

    /// Get the provider name for logging.
    fn name(&self) -> &'static str;

    /// Check if the provider can reach its backend.
    async fn health_check(&self) -> NotificationResult<bool>;
}
