//! # jobboard-api
//!
//! HTTP API layer for JobBoard built on Axum.
//!
//! Provides the `/job` store and list endpoints, health probes, middleware
//! (CORS, compression, request logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
