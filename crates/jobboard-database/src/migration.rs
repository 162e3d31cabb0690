//! Embedded schema for the job store.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use jobboard_core::error::{AppError, ErrorKind};

/// Migrations from `migrations/`, compiled into the binary.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the `jobs` table up to date. Safe to call on every start.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(
        available = MIGRATOR.iter().count(),
        "Applying job store migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to migrate the job store: {e}"),
            e,
        )
    })?;

    info!("Job store schema is current");
    Ok(())
}
