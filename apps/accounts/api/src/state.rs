//! Application state management.
//!
//! The state holds configuration, the optional PostgreSQL pool and the email
//! provider. Each domain router builds its own service from it.

use domain_notifications::EmailProvider;
use std::sync::Arc;

/// Shared application state.
///
/// Cloned for the readiness handler; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL pool, `None` when running on the in-memory store
    pub db: Option<database::DatabaseConnection>,
    /// Outgoing email (SMTP or log)
    pub notifier: Arc<dyn EmailProvider>,
}
