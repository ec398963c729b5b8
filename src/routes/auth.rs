use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;

use crate::auth::{hash_password, SignupRequest};
use crate::error::AppError;
use crate::models::NewUser;
use crate::state::AppState;

/// Registers a new user.
///
/// Validates the payload, hashes the password, and stores the user with the
/// default role. A taken email answers 409; the plaintext password is never
/// stored.
///
/// ## Responses:
/// - `201 Created`: confirmation message and the new user's id.
/// - `400 Bad Request`: a required field is missing or the email is malformed.
/// - `409 Conflict`: the email is already registered.
/// - `500 Internal Server Error`: store or hasher failure.
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    let (full_name, email, password) = body.validated()?;
    let password_hash = hash_password(password)?;

    let id = state
        .users
        .create(NewUser {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password_hash,
            role: None,
        })
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "id": id
    })))
}
