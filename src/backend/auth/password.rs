//! Password hashing
//!
//! bcrypt is deliberately slow, so both hashing and verification run on
//! tokio's blocking pool. A signup or login in progress never stalls other
//! requests on the async workers.

use bcrypt::{hash, verify};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a plaintext password with a fresh salt at the given cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || hash(password, cost)).await??;
    Ok(hashed)
}

/// Compare a plaintext password with a stored bcrypt hash
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is
/// unusable or the task could not run.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    let matches = tokio::task::spawn_blocking(move || verify(password, &password_hash)).await??;
    Ok(matches)
}
