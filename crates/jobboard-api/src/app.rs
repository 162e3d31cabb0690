//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::DatabasePool;
use jobboard_database::repositories::JobRepository;
use jobboard_service::{JobService, ShortIdGenerator};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Wire the repository and service on top of an existing pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let job_repo = Arc::new(JobRepository::new(db.pool().clone()));
    let job_service = JobService::new(job_repo, Arc::new(ShortIdGenerator::new()));
    AppState::new(config, db, job_service)
}

/// Runs the JobBoard server until Ctrl+C, then closes the pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting JobBoard server...");

    let addr = config.server.bind_address();
    let app = build_app(build_state(config, db.clone()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("JobBoard server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    db.close().await;
    served
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
