use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Assembles the public router around the API routes.
///
/// This sets up:
/// - The OpenAPI document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - JSON 404 fallback
/// - Request tracing, security headers and compression
/// - CORS, only when `CORS_ALLOWED_ORIGIN` is set
///
/// Health endpoints are merged by the app with `health_router()` and its
/// own readiness handler.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` contains an invalid origin.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let doc = T::openapi();

    let mut router = Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || std::future::ready(Json(doc.clone()))),
        )
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = cors_layer_from_env()? {
        router = router.layer(cors);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained by axum's graceful shutdown. `cleanup`
/// (closing the database pool, etc.) gets at most
/// `server_config.shutdown_timeout` before it is abandoned.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let shutdown_handle = coordinator.clone();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_shutdown().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let signal_handle = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_handle.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // A server error also has to release the cleanup task
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<TestDoc>(apis).unwrap()
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = router()
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route_gets_json_404() {
        let response = router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["status"], "NOT_FOUND");
        assert_eq!(json["errorCode"], "RESOURCE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = router()
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["info"]["title"], "Test API");
    }
}
