//! The `taskdeck` library crate.
//!
//! Core business logic for the taskdeck API: entity models, the credential
//! hasher, per-entity repositories, route handlers, configuration, and error
//! handling. The binary in `main.rs` wires these into a running server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
