//! Username lookup for an external authentication layer.
//!
//! The email is the username. Nothing here checks passwords or makes an
//! authorization decision; the caller does that with the returned hash.

use std::sync::Arc;
use tracing::{instrument, warn};

use crate::error::{UserError, UserResult};
use crate::models::UserCredentials;
use crate::repository::UserRepository;

pub struct UserCredentialsService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserCredentialsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// `UsernameNotFound` when no user has exactly this email
    #[instrument(skip(self))]
    pub async fn load_user_by_username(&self, email: &str) -> UserResult<UserCredentials> {
        let user = self.repository.get_by_email(email).await?.ok_or_else(|| {
            warn!("No user for username");
            UserError::UsernameNotFound(email.to_string())
        })?;

        Ok(UserCredentials {
            username: user.email,
            password_hash: user.password_hash,
            authorities: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::repository::InMemoryUserRepository;

    #[tokio::test]
    async fn test_loads_hash_without_authorities() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.create(NewUser::new(
            "a@x.com".to_string(),
            "$argon2id$hash".to_string(),
            "A".to_string(),
            "B".to_string(),
        ))
        .await
        .unwrap();

        let credentials = UserCredentialsService::new(repo)
            .load_user_by_username("a@x.com")
            .await
            .unwrap();

        assert_eq!(credentials.username, "a@x.com");
        assert_eq!(credentials.password_hash, "$argon2id$hash");
        assert!(credentials.authorities.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_username() {
        let service = UserCredentialsService::new(Arc::new(InMemoryUserRepository::new()));

        let result = service.load_user_by_username("nobody@x.com").await;
        assert!(matches!(result, Err(UserError::UsernameNotFound(e)) if e == "nobody@x.com"));
    }
}
