//! SMTP email provider implementation using lettre.
//!
//! Without TLS it talks plain SMTP, which is what MailHog/Mailpit expect in
//! local development.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use core_config::mail::{MailConfig, SmtpSettings};
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, error, info};

/// SMTP email provider.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
    port: u16,
}

impl SmtpProvider {
    /// Create a provider from the mail configuration.
    ///
    /// Fails if the sender address does not parse or the relay cannot be
    /// set up. No connection is opened yet.
    pub fn new(config: &MailConfig) -> NotificationResult<Self> {
        let from = mailbox(&config.from_name, &config.from_email)?;
        let transport = Self::build_transport(&config.smtp)?;
        Ok(Self {
            transport,
            from,
            host: config.smtp.host.clone(),
            port: config.smtp.port,
        })
    }

    fn build_transport(
        smtp: &SmtpSettings,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let mut builder = if smtp.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
                .map_err(|e| {
                    NotificationError::ProviderError(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(smtp.port)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host).port(smtp.port)
        };

        if let (Some(username), Some(password)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    fn build_message(&self, email: &EmailContent) -> NotificationResult<Message> {
        let to = mailbox(&email.to_name, &email.to_email)?;
        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject);

        let message = match &email.html_body {
            Some(html) => builder.multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html.clone()),
                    ),
            )?,
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(email.text_body.clone())?,
        };

        Ok(message)
    }
}

fn mailbox(name: &str, address: &str) -> NotificationResult<Mailbox> {
    let address = address.parse::<Address>()?;
    let name = (!name.is_empty()).then(|| name.to_string());
    Ok(Mailbox::new(name, address))
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        debug!(
            to = %email.to_email,
            subject = %email.subject,
            host = %self.host,
            port = %self.port,
            "Sending email via SMTP"
        );

        let message = self.build_message(email)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(
                to = %email.to_email,
                error = %e,
                "Failed to send email via SMTP"
            );
            NotificationError::ProviderError(format!("SMTP send failed: {}", e))
        })?;

        let message_id = response.message().next().map(|s| s.to_string());

        info!(
            to = %email.to_email,
            message_id = ?message_id,
            "Email sent successfully via SMTP"
        );

        Ok(SentEmail {
            message_id,
            accepted: response.is_positive(),
        })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        self.transport.test_connection().await.map_err(|e| {
            NotificationError::ProviderError(format!("SMTP health check failed: {}", e))
        })
    }
}
