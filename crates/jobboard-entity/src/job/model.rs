//! Job entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobboard_core::types::JobId;

/// A stored job posting.
///
/// Rows are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Server-assigned short identifier.
    pub id: JobId,
    /// Job title.
    pub title: String,
    /// Name of the hiring organization.
    pub organization_name: String,
    /// Contract type, free text (e.g. `"Full-time"`).
    pub contract_type: String,
    /// Location, free text.
    pub location: String,
    /// Link to the original posting. Not validated as a URL.
    pub link: String,
}

impl Job {
    /// Attach a freshly generated identifier to a new posting.
    pub fn from_new(id: JobId, new: NewJob) -> Self {
        Self {
            id,
            title: new.title,
            organization_name: new.organization_name,
            contract_type: new.contract_type,
            location: new.location,
            link: new.link,
        }
    }
}

/// Data required to store a job, as sent in the `POST /job` body.
/// Empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    /// Job title.
    pub title: String,
    /// Name of the hiring organization.
    pub organization_name: String,
    /// Contract type.
    pub contract_type: String,
    /// Location.
    pub location: String,
    /// Link to the original posting.
    pub link: String,
}
