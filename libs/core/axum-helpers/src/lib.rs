//! # Axum Helpers
//!
//! Shared HTTP plumbing for the account API.
//!
//! ## Modules
//!
//! - **[`errors`]**: The `ApiError` body and the `ErrorCode` catalogue
//! - **[`extractors`]**: `ValidatedJson` and `IdPath`, rejecting with `ApiError`
//! - **[`http`]**: Security headers and optional CORS
//! - **[`server`]**: Router assembly, health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, FromEnv};
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &ServerConfig::from_env()?, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{ApiError, ErrorCode};
pub use extractors::{IdPath, ValidatedJson};
