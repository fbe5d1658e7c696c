//! Fixed message bodies sent by the account service.

use crate::providers::EmailContent;

pub const WELCOME_SUBJECT: &str = "Welcome to User Service!";

/// Welcome message for a freshly registered account.
pub fn welcome_email(to_email: &str, first_name: &str) -> EmailContent {
    EmailContent {
        to_email: to_email.to_string(),
        to_name: first_name.to_string(),
        subject: WELCOME_SUBJECT.to_string(),
        text_body: format!("Thank you for registering, {}!", first_name),
        ..Default::default()
    }
}
