//! Readiness check with the real database and mail transport probes.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check endpoint.
///
/// The database probe is only registered when a pool exists.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        checks.push((
            "database",
            Box::pin(async move {
                database::postgres::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ));
    }

    checks.push((
        "mail",
        Box::pin(async {
            match state.notifier.health_check().await {
                Ok(true) => Ok(()),
                Ok(false) => Err(format!("{} transport unreachable", state.notifier.name())),
                Err(e) => Err(e.to_string()),
            }
        }),
    ));

    run_health_checks(checks).await.into_response()
}
