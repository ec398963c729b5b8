use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;

use crate::error::AppError;
use crate::models::{NewTask, TaskInput, TaskUpdate};
use crate::state::AppState;

/// Creates a task. `userId` is stored as given; whether it names an existing
/// user is not checked here or anywhere below.
///
/// ## Responses:
/// - `201 Created`: confirmation message and the new task's id.
/// - `400 Bad Request`: `title` or `userId` missing.
/// - `500 Internal Server Error`: store failure.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    body: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let (title, user_id) = body.validated()?;

    let id = state
        .tasks
        .create(NewTask {
            title: title.to_owned(),
            description: body.description.clone(),
            status: body.status.clone(),
            user_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Task created successfully",
        "id": id
    })))
}

/// Lists every task. An empty collection answers 200 with an empty array.
#[get("")]
pub async fn list_tasks(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.find_all().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Fetches one task by id. A malformed id answers 404, same as a missing
/// record.
#[get("/{id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task = state.tasks.find_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Partially updates a task. Only fields present in the payload overwrite
/// stored values; sending `{"status": "Done"}` leaves title, description,
/// and owner untouched.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    body.validate()?;
    state.tasks.update(&id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task updated successfully"
    })))
}

/// Deletes a task. Repeating the call answers 404.
#[delete("/{id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.tasks.delete(&id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
