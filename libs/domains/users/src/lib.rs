//! Users Domain
//!
//! User accounts: registration with a welcome email, lookup, listing,
//! partial update and deletion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Email uniqueness, password hashing, welcome email
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity and request/response DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_notifications::providers::{EmailProvider, LogProvider};
//! use domain_users::{Argon2Hasher, InMemoryUserRepository, UserService, handlers};
//!
//! let notifier: Arc<dyn EmailProvider> = Arc::new(LogProvider::new(&mail_config));
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(Argon2Hasher::new()),
//!     notifier,
//! );
//!
//! let router = handlers::router(service);
//! ```

pub mod credentials;
pub mod error;
pub mod handlers;
pub mod hasher;
pub mod models;
mod postgres_repository_impl;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use credentials::UserCredentialsService;
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use models::{NewUser, RegisterUser, UpdateUser, User, UserCredentials, UserResponse};
pub use postgres_repository_impl::PostgresUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
