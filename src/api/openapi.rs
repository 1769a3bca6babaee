use super::handlers::{health, user_login, user_register};
use crate::auth::UserProfile;
use utoipa::OpenApi;

/// `OpenAPI` document for the service.
///
/// Add new endpoints here via `paths(...)` so they show up in the generated
/// spec served by Swagger UI under `/docs`.
#[derive(OpenApi)]
#[openapi(
    paths(health::health, user_register::register, user_login::login),
    components(schemas(
        health::Health,
        user_register::RegisterRequest,
        user_register::RegisterResponse,
        user_login::LoginRequest,
        user_login::LoginResponse,
        UserProfile,
    )),
    tags(
        (name = "health", description = "Service health endpoints"),
        (name = "auth", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;
