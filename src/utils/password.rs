//! Argon2 password hashing and verification.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use thiserror::Error;

/// Failure to produce a password hash.
///
/// The underlying reason is deliberately not echoed back to clients.
#[derive(Debug, Error)]
#[error("failed to hash password")]
pub struct HashPasswordError;

/// Hashes a plaintext password with Argon2id and a random per-password salt.
///
/// The returned string is in PHC format and embeds the salt and parameters,
/// so it is self-contained for later verification.
pub fn hash_password(password: &str) -> Result<String, HashPasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| HashPasswordError)
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// Returns `false` for a mismatch and for malformed stored hashes; the
/// caller only distinguishes "login succeeds" from "login fails".
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
