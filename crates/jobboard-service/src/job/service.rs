//! Store and list job postings.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use jobboard_core::error::AppError;
use jobboard_core::traits::Repository;
use jobboard_entity::job::{Job, NewJob};

use super::id::IdGenerator;

/// Assigns identifiers to new postings and hands them to the repository.
///
/// Holds no job data itself; every call goes straight to the store.
#[derive(Clone)]
pub struct JobService {
    /// Job repository.
    job_repo: Arc<dyn Repository<Job>>,
    /// Identifier source.
    ids: Arc<dyn IdGenerator>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(job_repo: Arc<dyn Repository<Job>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { job_repo, ids }
    }

    /// Stores a new posting under a freshly generated id.
    ///
    /// No retry happens on failure: an unreadable random source or a
    /// rejected insert aborts the call.
    pub async fn store(&self, new_job: NewJob) -> Result<Job, AppError> {
        let id = self.ids.generate()?;
        let job = Job::from_new(id, new_job);

        self.job_repo.insert(&job).await?;

        info!(job_id = %job.id, "Job stored");
        Ok(job)
    }

    /// Lists every stored posting, in whatever order the store returns.
    pub async fn list(&self) -> Result<Vec<Job>, AppError> {
        let jobs = self.job_repo.find_all().await?;
        debug!(count = jobs.len(), "Jobs listed");
        Ok(jobs)
    }
}

impl fmt::Debug for JobService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobService").finish_non_exhaustive()
    }
}
