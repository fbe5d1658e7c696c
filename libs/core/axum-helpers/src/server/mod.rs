//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the OpenAPI document and common middleware
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let router = create_router::<ApiDoc>(api_routes)?
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &ServerConfig::default(), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
