use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: u64 = 8;

/// User entity - matches the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Unique, compared exactly
    pub email: String,
    /// Argon2 PHC string (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Set once at creation
    pub registration_date: DateTime<Utc>,
}

/// A user that has not been persisted yet; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub registration_date: DateTime<Utc>,
}

impl NewUser {
    /// Stamps the registration date with the current time
    pub fn new(email: String, password_hash: String, first_name: String, last_name: String) -> Self {
        Self {
            email,
            password_hash,
            first_name,
            last_name,
            registration_date: Utc::now(),
        }
    }

    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            registration_date: self.registration_date,
        }
    }
}

/// Public projection of a user (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "a@x.com")]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub registration_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            registration_date: user.registration_date,
        }
    }
}

/// DTO for registering a new user.
///
/// Absent and `null` fields read as empty strings so the validators report
/// every missing field together.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUser {
    #[validate(custom(function = "required_email"))]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(
        custom(function = "not_blank", message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters long")
    )]
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "password1", min_length = 8)]
    pub password: String,
    #[validate(custom(function = "not_blank", message = "First Name is required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[validate(custom(function = "not_blank", message = "Last Name is required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
}

/// DTO for a partial update.
///
/// Absent or blank fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    #[validate(custom(function = "blank_or_email", message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(custom(
        function = "blank_or_password",
        message = "Password must be at least 8 characters long"
    ))]
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// What an external authentication layer needs to check a login.
///
/// Authorities are always empty: the service has no roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub username: String,
    pub password_hash: String,
    pub authorities: Vec<String>,
}

/// `Some(value)` when the field is present and not blank
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Blank reports only "required"; the format check applies to non-blank values
fn required_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("required").with_message(Cow::Borrowed("Email is required"))
        );
    }
    blank_or_email(value)
}

fn blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message(Cow::Borrowed("Invalid email format")))
}

fn blank_or_password(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.chars().count() as u64 >= MIN_PASSWORD_LEN {
        return Ok(());
    }
    Err(ValidationError::new("length")
        .with_message(Cow::Borrowed("Password must be at least 8 characters long")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::errors::validation_messages;

    fn registration() -> RegisterUser {
        RegisterUser {
            email: "a@x.com".to_string(),
            password: "password1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn test_registration_messages() {
        let input = RegisterUser {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            first_name: "   ".to_string(),
            ..registration()
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            "Invalid email format, First Name is required, Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_blank_password_is_required() {
        let input = RegisterUser {
            password: String::new(),
            ..registration()
        };

        let errors = input.validate().unwrap_err();
        let message = validation_messages(&errors);
        assert!(message.contains("Password is required"));
        assert!(message.contains("Password must be at least 8 characters long"));
    }

    #[test]
    fn test_registration_json_is_camel_case() {
        let input: RegisterUser = serde_json::from_str(
            r#"{"email":"a@x.com","password":"password1","firstName":"A","lastName":"B"}"#,
        )
        .unwrap();
        assert_eq!(input.first_name, "A");
        assert_eq!(input.last_name, "B");
    }

    #[test]
    fn test_registration_missing_and_null_fields_read_as_blank() {
        let input: RegisterUser =
            serde_json::from_str(r#"{"email":"a@x.com","password":null}"#).unwrap();
        assert_eq!(input.password, "");
        assert_eq!(input.first_name, "");

        let errors = input.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            "First Name is required, Last Name is required, Password is required, \
             Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_blank_email_is_only_required() {
        let input = RegisterUser {
            email: "  ".to_string(),
            ..registration()
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(validation_messages(&errors), "Email is required");
    }

    #[test]
    fn test_update_allows_blank_and_absent_fields() {
        let input: UpdateUser =
            serde_json::from_str(r#"{"email":"","password":"  ","firstName":"Z"}"#).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(non_blank(&input.email), None);
        assert_eq!(non_blank(&input.first_name), Some("Z"));
        assert_eq!(non_blank(&input.last_name), None);
    }

    #[test]
    fn test_update_checks_present_fields() {
        let input = UpdateUser {
            email: Some("nope".to_string()),
            password: Some("short".to_string()),
            ..Default::default()
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            "Invalid email format, Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_response_hides_password_hash() {
        let user = NewUser::new(
            "a@x.com".to_string(),
            "$argon2id$hash".to_string(),
            "A".to_string(),
            "B".to_string(),
        )
        .with_id(7);

        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["firstName"], "A");
        assert!(json.get("registrationDate").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());

        let entity = serde_json::to_value(&user).unwrap();
        assert!(entity.get("password_hash").is_none());
    }
}
