//! Health check handlers.

use axum::Json;
use axum::extract::State;

use jobboard_core::error::{AppError, ErrorKind};

use crate::dto::response::{HealthResponse, ReadinessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadinessResponse>, ApiError> {
    state.db.health_check().await.map_err(|e| {
        AppError::with_source(ErrorKind::ServiceUnavailable, "database unreachable", e)
    })?;

    Ok(Json(ReadinessResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
    }))
}
