use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ApiError)
    ),
    info(
        title = "Accounts API",
        version = "0.1.0",
        description = "User registration and account management"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_users::handlers::URL, api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
