//! Job repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{FromRow, PgPool};
use tracing::error;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_core::traits::Repository;
use jobboard_entity::job::Job;

const INSERT_JOB: &str = "INSERT INTO jobs (id, title, organizationName, contractType, location, link) \
     VALUES ($1, $2, $3, $4, $5, $6)";

// Unquoted column names fold to lower case in PostgreSQL, so the aliases
// line them up with the `Job` field names. No ORDER BY: callers must not
// rely on row order.
const SELECT_JOBS: &str = "SELECT id, title, organizationName AS organization_name, \
     contractType AS contract_type, location, link FROM jobs";

/// Repository for job postings, backed by the `jobs` table.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Job> for JobRepository {
    async fn insert(&self, job: &Job) -> AppResult<()> {
        sqlx::query(INSERT_JOB)
            .bind(&job.id)
            .bind(&job.title)
            .bind(&job.organization_name)
            .bind(&job.contract_type)
            .bind(&job.location)
            .bind(&job.link)
            .execute(&self.pool)
            .await
            .map_err(insert_error)?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        // The cursor is released when `rows` is dropped, on success or error.
        let mut rows = sqlx::query(SELECT_JOBS).fetch(&self.pool);
        let mut jobs = Vec::new();

        while let Some(row) = rows
            .try_next()
            .await
            .map_err(|e| list_error("could not list jobs", e))?
        {
            let job = Job::from_row(&row).map_err(|e| list_error("could not scan jobs", e))?;
            jobs.push(job);
        }

        Ok(jobs)
    }
}

/// Insert failures carry the driver message verbatim.
fn insert_error(err: sqlx::Error) -> AppError {
    let kind = match err.as_database_error() {
        Some(db) if db.is_unique_violation() => ErrorKind::Conflict,
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, err.to_string(), err)
}

/// List failures hide the cause from callers but keep it for the logs.
fn list_error(message: &'static str, err: sqlx::Error) -> AppError {
    error!(error = %err, "{message}");
    AppError::with_source(ErrorKind::Database, message, err)
}
