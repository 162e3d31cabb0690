//! Response DTOs.

use serde::{Deserialize, Serialize};

use jobboard_entity::job::Job;

/// Body of `GET /job`. `jobs` is always an array, empty when nothing is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListJobsResponse {
    /// Stored jobs, in no particular order.
    pub jobs: Vec<Job>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
