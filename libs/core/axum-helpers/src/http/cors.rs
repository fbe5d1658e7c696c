use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Creates a CORS layer for the given origins.
///
/// Allows the methods the account API exposes and JSON content headers.
/// Preflight responses are cached for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Builds a CORS layer from the comma-separated `CORS_ALLOWED_ORIGIN`.
///
/// Returns `Ok(None)` when the variable is unset or blank: the API is then
/// same-origin only.
///
/// # Errors
/// Returns an error if any listed origin is not a valid header value.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(origins_str) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        return Ok(None);
    };

    let allowed_origins = parse_origins(&origins_str)?;
    if allowed_origins.is_empty() {
        return Ok(None);
    }

    info!("CORS configured with allowed origins: {}", origins_str);
    Ok(Some(create_cors_layer(allowed_origins)))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })
}
