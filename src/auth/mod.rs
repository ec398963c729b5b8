pub mod password;

pub use password::{hash_password, verify_password};

use serde::Deserialize;

use crate::error::AppError;
use crate::models::is_blank;

/// Signup payload. Identical to user creation except that no role can be
/// chosen; signups always get the default role.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    /// Checks required-field presence and email shape, returning the
    /// required values (`fullName`, `email`, `password`) on success.
    pub fn validated(&self) -> Result<(&str, &str, &str), AppError> {
        let mut missing = Vec::new();
        if is_blank(&self.full_name) {
            missing.push("fullName");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.password) {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let full_name = self.full_name.as_deref().unwrap_or_default();
        let email = self.email.as_deref().unwrap_or_default();
        let password = self.password.as_deref().unwrap_or_default();

        if !validator::validate_email(email) {
            return Err(AppError::Validation("Invalid email address".into()));
        }

        Ok((full_name, email, password))
    }
}
