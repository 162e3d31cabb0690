//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobboard_core::config::AppConfig;
use jobboard_database::DatabasePool;
use jobboard_service::JobService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used by readiness checks
    pub db: DatabasePool,
    /// Job store/list service
    pub job_service: Arc<JobService>,
}

impl AppState {
    /// Assemble the state from already constructed dependencies.
    pub fn new(config: AppConfig, db: DatabasePool, job_service: JobService) -> Self {
        Self {
            config: Arc::new(config),
            db,
            job_service: Arc::new(job_service),
        }
    }
}
