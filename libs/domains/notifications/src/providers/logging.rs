//! Provider that writes messages to the log instead of delivering them.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::NotificationResult;
use async_trait::async_trait;
use core_config::mail::MailConfig;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LogProvider {
    from_email: String,
}

impl LogProvider {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            from_email: config.from_email.clone(),
        }
    }
}

#[async_trait]
impl EmailProvider for LogProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        info!(
            from = %self.from_email,
            to = %email.to_email,
            subject = %email.subject,
            body = %email.text_body,
            "Email not delivered (log transport)"
        );

        Ok(SentEmail {
            message_id: None,
            accepted: true,
        })
    }

    fn name(&self) -> &'static str {
        "Log"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        Ok(true)
    }
}
