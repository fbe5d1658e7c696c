//! Notifications Domain
//!
//! Outgoing email for the account service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  UserService    │  ← builds EmailContent (see `templates`)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ EmailProvider   │  ← SmtpProvider or LogProvider, chosen by MAIL_TRANSPORT
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_config::{FromEnv, mail::MailConfig};
//! use domain_notifications::{build_provider, templates::welcome_email};
//!
//! let provider = build_provider(&MailConfig::from_env()?)?;
//! provider.send(&welcome_email("a@x.com", "Ada")).await?;
//! ```

pub mod error;
pub mod providers;
pub mod templates;

pub use error::{NotificationError, NotificationResult};
pub use providers::{EmailContent, EmailProvider, LogProvider, SentEmail, SmtpProvider};

use core_config::mail::{MailConfig, MailTransport};
use std::sync::Arc;

/// Provider selected by `config.transport`
pub fn build_provider(config: &MailConfig) -> NotificationResult<Arc<dyn EmailProvider>> {
    let provider: Arc<dyn EmailProvider> = match config.transport {
        MailTransport::Log => Arc::new(LogProvider::new(config)),
        MailTransport::Smtp => Arc::new(SmtpProvider::new(config)?),
    };
    tracing::info!(provider = provider.name(), "Email provider configured");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_provider_follows_transport() {
        let mut config = MailConfig::default();
        assert_eq!(build_provider(&config).unwrap().name(), "Log");

        config.transport = MailTransport::Smtp;
        assert_eq!(build_provider(&config).unwrap().name(), "SMTP");
    }
}
