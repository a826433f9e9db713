use auth::PasswordError;
use auth::PasswordHasher;

use crate::principal::models::Password;

/// Hash a password on the blocking pool.
///
/// Argon2 is deliberately slow, so it never runs on an async worker thread.
pub async fn hash_password(
    hasher: &PasswordHasher,
    password: &Password,
) -> Result<String, PasswordError> {
    let hasher = hasher.clone();
    let password = password.expose().to_string();

    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
}

/// Verify a password against a stored hash on the blocking pool.
pub async fn verify_password(
    hasher: &PasswordHasher,
    password: &str,
    password_hash: &str,
) -> Result<bool, PasswordError> {
    let hasher = hasher.clone();
    let password = password.to_string();
    let password_hash = password_hash.to_string();

    tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
        .await
        .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
}
