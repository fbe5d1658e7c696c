use crate::{env_flag, env_or_default, env_parse_or, ConfigError, FromEnv};

/// How outgoing mail leaves the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MailTransport {
    /// Write the message to the log instead of sending it (local development)
    Log,
    /// Deliver through an SMTP relay
    Smtp,
}

/// SMTP relay settings
#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_tls: bool,
}

/// Outgoing mail configuration
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub transport: MailTransport,
    pub from_email: String,
    pub from_name: String,
    pub smtp: SmtpSettings,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: MailTransport::Log,
            from_email: "noreply@userservice.com".to_string(),
            from_name: "User Service".to_string(),
            smtp: SmtpSettings {
                host: "localhost".to_string(),
                port: 1025,
                username: None,
                password: None,
                use_tls: false,
            },
        }
    }
}

impl FromEnv for MailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let transport = match env_or_default("MAIL_TRANSPORT", "log").to_ascii_lowercase().as_str() {
            "log" => MailTransport::Log,
            "smtp" => MailTransport::Smtp,
            other => {
                return Err(ConfigError::ParseError {
                    key: "MAIL_TRANSPORT".to_string(),
                    details: format!("expected 'log' or 'smtp', got '{}'", other),
                })
            }
        };

        Ok(Self {
            transport,
            from_email: env_or_default("MAIL_FROM", "noreply@userservice.com"),
            from_name: env_or_default("MAIL_FROM_NAME", "User Service"),
            smtp: SmtpSettings {
                host: env_or_default("SMTP_HOST", "localhost"),
                port: env_parse_or("SMTP_PORT", 1025)?,
                username: std::env::var("SMTP_USERNAME").ok(),
                password: std::env::var("SMTP_PASSWORD").ok(),
                use_tls: env_flag("SMTP_USE_TLS", false),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_defaults() {
        temp_env::with_vars_unset(
            ["MAIL_TRANSPORT", "MAIL_FROM", "SMTP_HOST", "SMTP_PORT", "SMTP_USE_TLS"],
            || {
                let config = MailConfig::from_env().unwrap();
                assert_eq!(config.transport, MailTransport::Log);
                assert_eq!(config.from_email, "noreply@userservice.com");
                assert_eq!(config.smtp.port, 1025);
                assert!(!config.smtp.use_tls);
            },
        );
    }

    #[test]
    fn test_mail_config_smtp() {
        temp_env::with_vars(
            [
                ("MAIL_TRANSPORT", Some("SMTP")),
                ("SMTP_HOST", Some("mail.internal")),
                ("SMTP_PORT", Some("587")),
                ("SMTP_USE_TLS", Some("true")),
            ],
            || {
                let config = MailConfig::from_env().unwrap();
                assert_eq!(config.transport, MailTransport::Smtp);
                assert_eq!(config.smtp.host, "mail.internal");
                assert_eq!(config.smtp.port, 587);
                assert!(config.smtp.use_tls);
            },
        );
    }

    #[test]
    fn test_mail_config_rejects_unknown_transport() {
        temp_env::with_var("MAIL_TRANSPORT", Some("pigeon"), || {
            let err = MailConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MAIL_TRANSPORT"));
        });
    }
}
