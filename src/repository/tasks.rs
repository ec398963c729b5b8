use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskUpdate};
use crate::repository::parse_id;

/// Persistence operations for tasks. `user_id` is stored as given; whether
/// it names an existing user is never checked.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new task and returns the store-assigned id. The default
    /// status is applied here when the payload carried none.
    pub async fn create(&self, task: NewTask) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO tasks (title, description, status, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status())
        .bind(task.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Every stored task, newest first. An empty table yields an empty
    /// vector, never an error.
    pub async fn find_all(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, user_id, created_at, updated_at
             FROM tasks
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Task, AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;

        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, user_id, created_at, updated_at
             FROM tasks
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(not_found)
    }

    /// Applies the provided fields and refreshes `updated_at`. Omitted
    /// fields bind as NULL and keep their stored values via COALESCE.
    pub async fn update(&self, id: &str, changes: TaskUpdate) -> Result<(), AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;

        let result = sqlx::query(
            "UPDATE tasks
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 status = COALESCE($4, status),
                 user_id = COALESCE($5, user_id),
                 updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.status)
        .bind(changes.user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Task not found".into())
}
