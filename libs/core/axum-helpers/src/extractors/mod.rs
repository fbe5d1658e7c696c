//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with an [`ApiError`](crate::errors::ApiError) so
//! malformed input gets the same body shape as every other failure.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
