use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use std::sync::LazyLock;
use thiserror::Error;

/// Digest verified when no account matches the login email.
static DUMMY_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("no-such-account").ok());

#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct HashingError(String);

/// Hashes `plaintext` with argon2id and a fresh random salt, returning a PHC string.
pub fn hash_password(plaintext: &str) -> Result<String, HashingError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HashingError(e.to_string()))
}

/// Checks `plaintext` against a stored digest. An unparsable digest never verifies.
pub fn verify_password(digest: &str, plaintext: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Runs a verify against a fixed digest and always reports failure.
pub fn verify_dummy(plaintext: &str) -> bool {
    if let Some(digest) = DUMMY_DIGEST.as_deref() {
        let _ = verify_password(digest, plaintext);
    }
    false
}
