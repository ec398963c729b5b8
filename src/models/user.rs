use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::is_blank;

/// Role assigned to a user when the creation payload omits one.
pub const DEFAULT_ROLE: &str = "User";

/// A user record as stored and as returned by the API. The password hash
/// never leaves the repository's SELECT list, so it has no field here.
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new user. `password_hash` is already the bcrypt
/// digest; handlers hash before constructing this.
#[derive(Debug)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Option<String>,
}

impl NewUser {
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

/// Creation payload as it arrives on the wire. Every field is optional at
/// the type level so that a missing field can be reported by name instead of
/// failing deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UserInput {
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

/// Partial update payload. A field left out of the request stays untouched;
/// a field that is present must carry a usable value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut blank = Vec::new();
        if self.full_name.is_some() && is_blank(&self.full_name) {
            blank.push("fullName");
        }
        if self.email.is_some() && is_blank(&self.email) {
            blank.push("email");
        }
        if self.password.is_some() && is_blank(&self.password) {
            blank.push("password");
        }
        if !blank.is_empty() {
            return Err(AppError::Validation(format!(
                "Fields must not be empty: {}",
                blank.join(", ")
            )));
        }
        if let Some(email) = self.email.as_deref() {
            if !validator::validate_email(email) {
                return Err(AppError::Validation("Invalid email address".into()));
            }
        }
        Ok(())
    }

    /// Turns the wire payload into column-level changes. The plaintext
    /// password has been hashed by the caller, if one was provided.
    pub fn into_changes(self, password_hash: Option<String>) -> UserChanges {
        UserChanges {
            full_name: self.full_name,
            email: self.email,
            password_hash,
            role: self.role,
        }
    }
}

/// Column-level changes applied by the repository.
#[derive(Debug)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
}
