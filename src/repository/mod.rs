//!
//! # Entity repositories
//!
//! One repository per entity kind, each owning a handle to the connection
//! pool and exposing the five persistence operations (create, find_all,
//! find_by_id, update, delete) as explicit `Result`s. Handlers never touch
//! the pool directly.

pub mod tasks;
pub mod users;

pub use tasks::TaskRepository;
pub use users::UserRepository;

use uuid::Uuid;

/// Parses a raw path segment into a store identifier. Callers treat a
/// malformed id exactly like an absent record, so no store round-trip is
/// made for one.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
