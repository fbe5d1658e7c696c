use axum::Router;
use core_config::database::StoreKind;
use domain_users::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService, handlers,
};
use std::sync::Arc;

/// Users router backed by the store selected with `USER_STORE`
pub fn router(state: &crate::state::AppState) -> Router {
    let hasher = Arc::new(Argon2Hasher::new());
    let notifier = Arc::clone(&state.notifier);

    match (state.config.store, &state.db) {
        (StoreKind::Postgres, Some(db)) => {
            let repository = PostgresUserRepository::new(db.clone());
            handlers::router(UserService::new(repository, hasher, notifier))
        }
        _ => {
            tracing::warn!("Using in-memory user store; data is lost on restart");
            handlers::router(UserService::new(
                InMemoryUserRepository::new(),
                hasher,
                notifier,
            ))
        }
    }
}
