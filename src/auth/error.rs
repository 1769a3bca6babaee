use thiserror::Error;

/// Terminal outcomes of a register or login call.
///
/// Each kind maps to a fixed status code at the HTTP boundary; the core only
/// distinguishes the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A record already exists for the normalized email.
    #[error("User already exists")]
    DuplicateUser,
    /// No record exists for the normalized email.
    #[error("User not found")]
    UserNotFound,
    /// The supplied password does not match the stored digest.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_user_facing_messages() {
        assert_eq!(AuthError::DuplicateUser.to_string(), "User already exists");
        assert_eq!(AuthError::UserNotFound.to_string(), "User not found");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
