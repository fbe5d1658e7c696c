//! PostgreSQL connectivity for the account service.
//!
//! Wraps SeaORM's connection pool with startup retry, a readiness probe and a
//! generic migration runner. Applications own their `Migrator`; this crate only
//! knows how to run one.
//!
//! ```ignore
//! use core_config::{database::DatabaseConfig, FromEnv};
//! use database::postgres;
//!
//! let config = DatabaseConfig::from_env()?;
//! let db = postgres::connect_with_retry(&config, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "accounts_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
pub use sea_orm::DatabaseConnection;
