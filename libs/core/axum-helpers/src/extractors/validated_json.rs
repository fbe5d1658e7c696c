//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ApiError, validation_messages};
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Both a body that does not deserialize and one that fails `Validate` are
/// answered with 400 `VALIDATION_ERROR`. Field messages are joined into a
/// single string, fields in name order.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(email(message = "Invalid email format"))]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.email)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            ApiError::validation(e.body_text()).into_response()
        })?;

        data.validate().map_err(|e| {
            let message = validation_messages(&e);
            tracing::debug!(%message, "Request validation failed");
            ApiError::validation(message).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1, message = "Count must be positive"))]
        count: u32,
    }

    async fn accept(ValidatedJson(p): ValidatedJson<Payload>) -> String {
        format!("{}:{}", p.name, p.count)
    }

    async fn send(body: &str) -> (StatusCode, Vec<u8>) {
        let response = Router::new()
            .route("/", post(accept))
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let (status, body) = send(r#"{"name":"widget","count":3}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"widget:3");
    }

    #[tokio::test]
    async fn test_invalid_fields_are_aggregated() {
        let (status, body) = send(r#"{"name":"","count":0}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errorCode"], "VALIDATION_ERROR");
        assert_eq!(
            json["message"],
            "Validation error: Count must be positive, Name is required"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let (status, body) = send("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errorCode"], "VALIDATION_ERROR");
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .starts_with("Validation error: ")
        );
    }
}
