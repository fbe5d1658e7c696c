use axum_helpers::server::{create_production_app, health_router};
use core_config::{
    database::StoreKind,
    tracing::{init_tracing, install_color_eyre},
};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let notifier = domain_notifications::build_provider(&config.mail)
        .map_err(|e| eyre::eyre!("Email provider setup failed: {}", e))?;

    let db = match (config.store, &config.database) {
        (StoreKind::Postgres, Some(db_config)) => {
            let db = database::postgres::connect_with_retry(db_config, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
            database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
                .await?;
            Some(db)
        }
        _ => None,
    };

    let state = AppState {
        config,
        db,
        notifier,
    };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::server::create_router::<openapi::ApiDoc>(api_routes)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check with database and mail probes
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        store = ?state.config.store,
        "Starting accounts API with graceful shutdown ({:?} timeout)",
        state.config.server.shutdown_timeout
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
