use crate::{
    api::handlers::{error_status, valid_email},
    auth::{normalize_email, UserProfile, UserStore},
};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct LoginRequest {
    email: String,
    #[schema(value_type = String, format = Password)]
    password: SecretString,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    message: String,
    user: UserProfile,
}

#[utoipa::path(
    post,
    path= "/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = LoginResponse, content_type = "application/json"),
        (status = 400, description = "Malformed payload"),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "User not found"),
    ),
    tag= "auth"
)]
// axum handler for user login
#[instrument(skip(store, payload))]
pub async fn login(
    store: Extension<Arc<UserStore>>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    let user: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("login: {:?}", user);

    let email = normalize_email(&user.email);
    if !valid_email(&email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    match store.login(&email, &user.password).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Login successful".to_string(),
                user: profile,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("Login failed: {err}");

            (error_status(&err), err.to_string()).into_response()
        }
    }
}
