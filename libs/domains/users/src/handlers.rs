use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{ApiError, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{RegisterUser, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Path the router is nested under, relative to `/api`
pub const URL: &str = "/v1/users";
const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(register_user, list_users, get_user, update_user, delete_user),
    components(schemas(RegisterUser, UpdateUser, UserResponse, ApiError)),
    tags(
        (name = TAG, description = "User account management")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/register", post(register_user))
        .route("/", get(list_users))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = TAG,
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 409, description = "Email already exists", body = ApiError),
        (status = 500, description = "Internal Server Error", body = ApiError)
    )
)]
async fn register_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, description = "Error accessing user data", body = ApiError)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Non-numeric id", body = ApiError),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Partially update a user; blank fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid input or update failure", body = ApiError),
        (status = 404, description = "User not found", body = ApiError),
        (status = 409, description = "Email already exists", body = ApiError)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ApiError),
        (status = 500, description = "Error deleting user", body = ApiError)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
