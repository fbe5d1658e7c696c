//! PostgreSQL connection pool, readiness probe and migration runner

mod connector;
mod health;

pub use connector::{connect, connect_options, connect_with_retry, run_migrations};
pub use health::check_health;
