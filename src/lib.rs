//! Sample users/posts JSON API.
//!
//! Serves fixed user and post records over HTTP, echoes create/update
//! payloads back with an assigned id, and exposes liveness and readiness
//! probes. Nothing is persisted.
//!
//! ```text
//! GET  /health               {"status":"ok","version":"0.1.0"}
//! GET  /users/1              {"id":1,"name":"Sample User",...}
//! GET  /users/abc            400 {"error":"Invalid id: must be a valid integer"}
//! POST /posts {"title":..}   201 {"id":1,"title":..}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Service and API error types
//! - [`api`]: Router, handlers and entity types
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
