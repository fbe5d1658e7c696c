use domain_notifications::{EmailProvider, templates::welcome_email};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::credentials::UserCredentialsService;
use crate::error::{UserError, UserResult};
use crate::hasher::CredentialHasher;
use crate::models::{NewUser, RegisterUser, UpdateUser, User, UserResponse, non_blank};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: Arc<dyn CredentialHasher>,
    notifier: Arc<dyn EmailProvider>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(
        repository: R,
        hasher: Arc<dyn CredentialHasher>,
        notifier: Arc<dyn EmailProvider>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher,
            notifier,
        }
    }

    /// Username lookup backed by the same store
    pub fn credentials(&self) -> UserCredentialsService<R> {
        UserCredentialsService::new(Arc::clone(&self.repository))
    }

    /// Register a new user and send the welcome email.
    ///
    /// The input is expected to be validated already. A failing notifier
    /// fails the call, but the user stays stored.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterUser) -> UserResult<UserResponse> {
        info!("Registering new user");

        if self.repository.get_by_email(&input.email).await?.is_some() {
            warn!("Email already registered");
            return Err(UserError::EmailAlreadyExists(input.email));
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let user = self
            .repository
            .create(NewUser::new(
                input.email,
                password_hash,
                input.first_name,
                input.last_name,
            ))
            .await?;
        info!(user_id = user.id, "User registered");

        self.send_welcome_email(&user).await?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> UserResult<UserResponse> {
        let user = self.repository.get_by_id(id).await?.ok_or_else(|| {
            warn!("User not found");
            UserError::NotFound(id)
        })?;

        Ok(user.into())
    }

    /// Every user in store order
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list users");
            UserError::DataAccess(e.to_string())
        })?;

        tracing::debug!(count = users.len(), "Listed users");
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Merge the non-blank fields of `input` into the stored user.
    ///
    /// Fields are applied in order: first name, last name, email (re-checked
    /// for uniqueness), password (re-hashed).
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<UserResponse> {
        info!("Updating user");

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let updated = self
            .merge_and_save(existing, input)
            .await
            .map_err(|e| match e {
                UserError::EmailAlreadyExists(_) | UserError::NotFound(_) => e,
                other => {
                    tracing::error!(error = %other, "Failed to update user");
                    UserError::UpdateFailed(other.to_string())
                }
            })?;

        info!("User updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        info!("Deleting user");

        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(|e| UserError::DeleteFailed(e.to_string()))?;
        if !exists {
            warn!("User not found");
            return Err(UserError::NotFound(id));
        }

        self.repository.delete(id).await.map_err(|e| match e {
            UserError::NotFound(_) => e,
            other => {
                tracing::error!(error = %other, "Failed to delete user");
                UserError::DeleteFailed(other.to_string())
            }
        })?;

        info!("User deleted");
        Ok(())
    }

    async fn merge_and_save(&self, mut user: User, input: UpdateUser) -> UserResult<User> {
        if let Some(first_name) = non_blank(&input.first_name) {
            user.first_name = first_name.to_string();
        }

        if let Some(last_name) = non_blank(&input.last_name) {
            user.last_name = last_name.to_string();
        }

        if let Some(email) = non_blank(&input.email) {
            if email != user.email {
                if self.repository.get_by_email(email).await?.is_some() {
                    warn!(email = %email, "Email already registered");
                    return Err(UserError::EmailAlreadyExists(email.to_string()));
                }
                user.email = email.to_string();
            }
        }

        if let Some(password) = non_blank(&input.password) {
            user.password_hash = self.hasher.hash(password)?;
        }

        self.repository.update(user).await
    }

    async fn send_welcome_email(&self, user: &User) -> UserResult<()> {
        let email = welcome_email(&user.email, &user.first_name);

        info!(provider = self.notifier.name(), "Sending welcome email");
        self.notifier.send(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to send welcome email");
            UserError::from(e)
        })?;
        Ok(())
    }
}
