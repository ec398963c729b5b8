use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;

use crate::auth::hash_password;
use crate::error::AppError;
use crate::models::{NewUser, UserInput, UserUpdate};
use crate::state::AppState;

/// Creates a user. Unlike signup, the payload may carry an explicit role.
///
/// ## Responses:
/// - `201 Created`: confirmation message and the new user's id.
/// - `400 Bad Request`: a required field is missing or the email is malformed.
/// - `409 Conflict`: the email is already registered.
/// - `500 Internal Server Error`: store or hasher failure.
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let (full_name, email, password) = body.validated()?;
    let password_hash = hash_password(password)?;

    let id = state
        .users
        .create(NewUser {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password_hash,
            role: body.role.clone(),
        })
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully",
        "id": id
    })))
}

/// Lists every user. An empty collection answers 200 with an empty array.
#[get("")]
pub async fn list_users(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let users = state.users.find_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Fetches one user by id. A malformed id answers 404, same as a missing
/// record.
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let user = state.users.find_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Partially updates a user. Only fields present in the payload overwrite
/// stored values; a provided password is hashed before it reaches the store.
///
/// ## Responses:
/// - `200 OK`: confirmation message.
/// - `400 Bad Request`: a provided field is blank or the email is malformed.
/// - `404 Not Found`: no user with that id.
/// - `409 Conflict`: the new email is already taken.
/// - `500 Internal Server Error`: store or hasher failure.
#[put("/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<UserUpdate>,
) -> Result<impl Responder, AppError> {
    body.validate()?;
    let update = body.into_inner();

    let password_hash = match update.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    state
        .users
        .update(&id, update.into_changes(password_hash))
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User updated successfully"
    })))
}

/// Deletes a user. Repeating the call answers 404, not an error page; the
/// user's tasks are not cascaded.
#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.users.delete(&id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "User deleted successfully"
    })))
}
