use crate::auth::{hash::hash_password, normalize_email, AuthError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// A registered user. Lives for the lifetime of the store, never updated or
/// deleted.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of a user, safe to echo back to clients.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// In-memory user store keyed by normalized email.
///
/// The write guard is held across the existence check and the insert, so
/// concurrent registrations for the same email resolve deterministically:
/// first writer wins, second gets [`AuthError::DuplicateUser`].
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user under the normalized email.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::DuplicateUser`] if a record already exists for
    /// the email, regardless of name or password.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<UserProfile, AuthError> {
        let email = normalize_email(email);

        let mut users = self.users.write().await;

        if users.contains_key(&email) {
            return Err(AuthError::DuplicateUser);
        }

        let user = User {
            name: name.to_string(),
            email: email.clone(),
            password_hash: hash_password(password.expose_secret()),
        };

        let profile = UserProfile::from(&user);

        users.insert(email, user);

        Ok(profile)
    }

    /// Authenticate an email/password pair. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserNotFound`] if no record exists for the
    /// normalized email, [`AuthError::InvalidCredentials`] if the password
    /// digest does not match.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserProfile, AuthError> {
        let email = normalize_email(email);

        let users = self.users.read().await;

        let user = users.get(&email).ok_or(AuthError::UserNotFound)?;

        if user.password_hash != hash_password(password.expose_secret()) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(UserProfile::from(user))
    }
}
