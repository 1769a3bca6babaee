use sha2::{Digest, Sha256};

/// Digest a password into a 64-char lowercase hex string.
///
/// Unsalted single-round SHA-256, demo only.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
