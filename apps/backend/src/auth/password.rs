use actix_web::web;
use tracing::error;

use crate::error::AppError;

/// Cheapest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Most expensive work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Hash `plaintext` with bcrypt at `cost`. Salt and cost live inside the digest.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(plaintext, cost).map_err(|e| {
        error!(error = %e, cost, "bcrypt hashing failed");
        AppError::internal(format!("bcrypt hash failed: {e}"))
    })
}

/// Recompute and compare. `Ok(false)` on mismatch.
///
/// A digest that bcrypt cannot parse means the store holds something we never
/// wrote; that is reported as an internal error instead of a failed login.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, AppError> {
    bcrypt::verify(plaintext, digest).map_err(|e| {
        error!(error = %e, "stored password digest is malformed");
        AppError::internal(format!("bcrypt verify failed: {e}"))
    })
}

/// Well-formed digest at `cost` that no password matches.
///
/// Verified against when the email is unknown, so that branch pays the same
/// bcrypt cost as a wrong password.
pub fn unmatchable_digest(cost: u32) -> String {
    format!("$2b${cost:02}${}", ".".repeat(53))
}

/// `hash_password` on the blocking pool.
pub async fn hash_password_off_thread(plaintext: String, cost: u32) -> Result<String, AppError> {
    web::block(move || hash_password(&plaintext, cost))
        .await
        .map_err(|e| AppError::internal(format!("password hashing task failed: {e}")))?
}

/// `verify_password` on the blocking pool.
pub async fn verify_password_off_thread(
    plaintext: String,
    digest: String,
) -> Result<bool, AppError> {
    web::block(move || verify_password(&plaintext, &digest))
        .await
        .map_err(|e| AppError::internal(format!("password verify task failed: {e}")))?
}
