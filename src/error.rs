//!
//! # Error handling
//!
//! Defines `AppError`, the single error type returned by repositories and
//! handlers. It implements `actix_web::error::ResponseError`, so a handler
//! returning `Err(AppError)` is turned into the matching HTTP response with a
//! JSON body.
//!
//! The mapping is fixed: validation failures are 400, duplicate unique keys
//! are 409, missing records are 404, everything else is 500. For the
//! 500-class variants the underlying cause is logged server-side and the
//! response body carries only a generic message.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

/// All error conditions a request can end in.
#[derive(Debug)]
pub enum AppError {
    /// A required field is missing or empty, or a provided field is
    /// malformed (HTTP 400).
    Validation(String),
    /// A unique key (the user email) is already taken (HTTP 409).
    Conflict(String),
    /// No record exists for the given id, or the id is not a well-formed
    /// identifier (HTTP 404).
    NotFound(String),
    /// The store failed in a way the client cannot fix (HTTP 500).
    Database(String),
    /// Any other unexpected failure, e.g. the hasher (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            // Driver error text and other internal detail stay in the log.
            AppError::Database(_) | AppError::Internal(_) => {
                log::error!("{}", self);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`. A unique-index violation maps to
/// `Conflict`; the store's unique index on `users.email` is the sole source
/// of conflict errors, there is no separate pre-check read. Anything else
/// becomes `Database`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Email already registered".into())
            }
            _ => AppError::Database(error.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
