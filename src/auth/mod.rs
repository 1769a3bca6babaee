//! Email/password authentication core.
//!
//! Holds the in-memory user store and the password digest function. The
//! store is an owned object handed to the HTTP layer, so tests get a fresh
//! instance each and the process-lifetime mapping never leaks into globals.

pub mod error;
pub mod hash;
pub mod store;

pub use self::error::AuthError;
pub use self::store::{User, UserProfile, UserStore};

/// Normalize an email for lookup/uniqueness checks.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn normalize_email_keeps_already_normalized() {
        assert_eq!(normalize_email("bob@example.com"), "bob@example.com");
    }
}
