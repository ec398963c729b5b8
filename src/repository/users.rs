use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, User, UserChanges};
use crate::repository::parse_id;

/// Persistence operations for users. Email uniqueness is coordinated
/// entirely by the store's unique index; a violation surfaces as
/// `AppError::Conflict` through the `From<sqlx::Error>` conversion.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user and returns the store-assigned id. The default
    /// role is applied here when the payload carried none.
    pub async fn create(&self, user: NewUser) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (full_name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Every stored user, newest first. An empty table yields an empty
    /// vector, never an error.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, role, created_at, updated_at
             FROM users
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User, AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, role, created_at, updated_at
             FROM users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(not_found)
    }

    /// Applies the provided fields and refreshes `updated_at`. Omitted
    /// fields bind as NULL and keep their stored values via COALESCE.
    pub async fn update(&self, id: &str, changes: UserChanges) -> Result<(), AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;

        let result = sqlx::query(
            "UPDATE users
             SET full_name = COALESCE($2, full_name),
                 email = COALESCE($3, email),
                 password_hash = COALESCE($4, password_hash),
                 role = COALESCE($5, role),
                 updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(changes.full_name)
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(changes.role)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    /// Removes the user unconditionally once found. Tasks referencing the
    /// user are left in place.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id).ok_or_else(not_found)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
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
    AppError::NotFound("User not found".into())
}
