pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

// common functions for the handlers
use crate::auth::AuthError;
use axum::http::StatusCode;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

pub fn valid_password(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_PASSWORD_LENGTH
}

/// Status code for each terminal auth outcome.
pub(crate) fn error_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::DuplicateUser => StatusCode::BAD_REQUEST,
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
    }
}
