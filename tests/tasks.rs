use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use dotenv::dotenv;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sqlx::PgPool;
use taskdeck::models::Task;
use taskdeck::routes::{self, health};
use taskdeck::state::AppState;
use uuid::Uuid;

// These flows need a live store. They self-skip when DATABASE_URL is unset
// so the suite stays green on machines without Postgres.
async fn test_pool() -> Option<PgPool> {
    dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping database-backed test");
        return None;
    };
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

async fn cleanup_tasks(pool: &PgPool, owner: Uuid) {
    let _ = sqlx::query("DELETE FROM tasks WHERE user_id = $1")
        .bind(owner)
        .execute(pool)
        .await;
}

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new($pool.clone())))
                .service(health::health)
                .service(web::scope("/api").configure(routes::config)),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_task_crud_flow() {
    let Some(pool) = test_pool().await else { return };

    // No user with this id exists: task creation does not check referential
    // integrity, so the insert still succeeds.
    let ghost_owner = Uuid::new_v4();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(&json!({
            "title": "Ship the release",
            "description": "Cut the tag and push images",
            "userId": ghost_owner
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Task created successfully");
    let id = body["id"].as_str().expect("id missing").to_string();

    // Fetch it back; the status default was applied.
    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let task: Task = test::read_body_json(resp).await;
    assert_eq!(task.id.to_string(), id);
    assert_eq!(task.title, "Ship the release");
    assert_eq!(
        task.description.as_deref(),
        Some("Cut the tag and push images")
    );
    assert_eq!(task.status, "Pending");
    assert_eq!(task.user_id, ghost_owner);

    // Updating only the status leaves every other field untouched.
    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", id))
        .set_json(&json!({ "status": "Done" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let task: Task = test::read_body_json(resp).await;
    assert_eq!(task.status, "Done");
    assert_eq!(task.title, "Ship the release");
    assert_eq!(
        task.description.as_deref(),
        Some("Cut the tag and push images")
    );
    assert_eq!(task.user_id, ghost_owner);

    // Updating a fresh random id is 404.
    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", Uuid::new_v4()))
        .set_json(&json!({ "status": "Done" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The collection includes the task.
    let req = test::TestRequest::get().uri("/api/tasks").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let tasks: Vec<Task> = test::read_body_json(resp).await;
    assert!(tasks.iter().any(|t| t.id.to_string() == id));

    // Delete, then the id is gone and a second delete is a clean 404.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/tasks/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Task deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tasks/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    cleanup_tasks(&pool, ghost_owner).await;
}

#[actix_rt::test]
async fn test_task_keeps_dangling_owner_after_user_delete() {
    let Some(pool) = test_pool().await else { return };
    let email = "task_owner_gone@example.com";
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(&pool)
        .await;

    let app = test_app!(pool);

    // Create a real user and a task owned by them.
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&json!({
            "fullName": "Soon Deleted",
            "email": email,
            "password": "Password123!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let owner_id = body["id"].as_str().expect("id missing").to_string();

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(&json!({
            "title": "Orphan me",
            "userId": owner_id,
            "status": "In Progress"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let task_id = body["id"].as_str().expect("id missing").to_string();

    // Deleting the user does not cascade to the task.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", owner_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", task_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let task: Task = test::read_body_json(resp).await;
    assert_eq!(task.title, "Orphan me");
    assert_eq!(task.status, "In Progress");
    assert_eq!(task.user_id.to_string(), owner_id);

    cleanup_tasks(&pool, task.user_id).await;
}
