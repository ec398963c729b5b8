use sqlx::PgPool;

use crate::repository::{TaskRepository, UserRepository};

/// Application context, constructed once at startup and injected into every
/// handler through `web::Data`. Holds one repository per entity kind; the
/// pool they share is the only resource shared between requests.
pub struct AppState {
    pub users: UserRepository,
    pub tasks: TaskRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool),
        }
    }
}
