//! HTTP API module for health, user and post endpoints.

pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::create_router;
pub use types::{Payload, Post, User};
