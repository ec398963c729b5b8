use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// One-way hashes a plaintext password. bcrypt salts every call, so hashing
/// the same plaintext twice yields different digests. The cost factor is the
/// crate's fixed `DEFAULT_COST`, not configurable per call.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Checks a plaintext password against a stored digest. No route calls this
/// yet; it exists as the counterpart to `hash_password`.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    Ok(verify(password, hashed_password)?)
}
