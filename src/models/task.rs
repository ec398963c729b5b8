use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::is_blank;

/// Status assigned to a task when the creation payload omits one.
pub const DEFAULT_STATUS: &str = "Pending";

/// A task record. `user_id` references a user by id but is not checked
/// against the users table, at creation or afterwards; deleting a user
/// leaves their tasks in place.
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new task.
#[derive(Debug)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub user_id: Uuid,
}

impl NewTask {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}

/// Creation payload as it arrives on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<Uuid>,
}

impl TaskInput {
    /// Checks required-field presence, returning (`title`, `userId`) on
    /// success.
    pub fn validated(&self) -> Result<(&str, Uuid), AppError> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if self.user_id.is_none() {
            missing.push("userId");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let title = self.title.as_deref().unwrap_or_default();
        let user_id = self.user_id.unwrap_or_default();

        Ok((title, user_id))
    }
}

/// Partial update payload. Omitted fields stay untouched; a present `title`
/// must be non-empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<Uuid>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.is_some() && is_blank(&self.title) {
            return Err(AppError::Validation("Fields must not be empty: title".into()));
        }
        Ok(())
    }
}
