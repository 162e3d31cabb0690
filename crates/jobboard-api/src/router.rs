//! Route definitions for the JobBoard HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request-level middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.request_body_limit_bytes;

    Router::new()
        .merge(job_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Job store and list
fn job_routes() -> Router<AppState> {
    Router::new().route(
        "/job",
        get(handlers::job::list).post(handlers::job::store),
    )
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
