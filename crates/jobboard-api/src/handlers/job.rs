//! Job posting handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use jobboard_entity::job::NewJob;

use crate::dto::response::ListJobsResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /job
///
/// Responds with an empty body on success.
pub async fn store(
    State(state): State<AppState>,
    Json(new_job): Json<NewJob>,
) -> Result<StatusCode, ApiError> {
    state.job_service.store(new_job).await?;
    Ok(StatusCode::OK)
}

/// GET /job
pub async fn list(State(state): State<AppState>) -> Result<Json<ListJobsResponse>, ApiError> {
    let jobs = state.job_service.list().await?;
    Ok(Json(ListJobsResponse { jobs }))
}
