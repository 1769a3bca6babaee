use crate::{
    api::handlers::{error_status, valid_email, valid_password},
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
pub struct RegisterRequest {
    name: String,
    email: String,
    #[schema(value_type = String, format = Password, min_length = 6)]
    password: SecretString,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    message: String,
    user: UserProfile,
}

#[utoipa::path(
    post,
    path= "/register",
    request_body = RegisterRequest,
    responses (
        (status = 201, description = "User created successfully", body = RegisterResponse, content_type = "application/json"),
        (status = 400, description = "Malformed payload or user already exists"),
    ),
    tag= "auth"
)]
// axum handler for user registration
#[instrument(skip(store, payload))]
pub async fn register(
    store: Extension<Arc<UserStore>>,
    payload: Option<Json<RegisterRequest>>,
) -> Response {
    let user: RegisterRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    // SecretString keeps the password out of the debug output
    debug!("register: {:?}", user);

    let name = user.name.trim();
    if name.is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid name".to_string()).into_response();
    }

    let email = normalize_email(&user.email);
    if !valid_email(&email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    if !valid_password(&user.password) {
        return (StatusCode::BAD_REQUEST, "Invalid password".to_string()).into_response();
    }

    match store.register(name, &email, &user.password).await {
        Ok(profile) => (
            StatusCode::CREATED,
            Json(RegisterResponse {
                message: "User registered".to_string(),
                user: profile,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("Registration failed: {err}");

            (error_status(&err), err.to_string()).into_response()
        }
    }
}
