//! Job posting CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output;
use jobboard_core::error::AppError;
use jobboard_database::repositories::JobRepository;
use jobboard_entity::job::{Job, NewJob};
use jobboard_service::{JobService, ShortIdGenerator};

use super::Cli;

/// Arguments for job commands
#[derive(Debug, Args)]
pub struct JobArgs {
    /// Job subcommand
    #[command(subcommand)]
    pub command: JobCommand,
}

/// Job subcommands
#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// List every stored job
    List,
    /// Store a new job
    Add(AddJobArgs),
}

/// Fields of a new job posting
#[derive(Debug, Args)]
pub struct AddJobArgs {
    /// Job title
    #[arg(long)]
    pub title: String,
    /// Hiring organization
    #[arg(long)]
    pub organization_name: String,
    /// Contract type, e.g. "Full-time"
    #[arg(long)]
    pub contract_type: String,
    /// Location
    #[arg(long)]
    pub location: String,
    /// Link to the posting
    #[arg(long)]
    pub link: String,
}

impl From<&AddJobArgs> for NewJob {
    fn from(args: &AddJobArgs) -> Self {
        Self {
            title: args.title.clone(),
            organization_name: args.organization_name.clone(),
            contract_type: args.contract_type.clone(),
            location: args.location.clone(),
            link: args.link.clone(),
        }
    }
}

/// Job display row for table output
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct JobRow {
    /// Job ID
    id: String,
    /// Title
    title: String,
    /// Organization
    organization_name: String,
    /// Contract type
    contract_type: String,
    /// Location
    location: String,
    /// Link
    link: String,
}

impl From<Job> for JobRow {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.into_string(),
            title: job.title,
            organization_name: job.organization_name,
            contract_type: job.contract_type,
            location: job.location,
            link: job.link,
        }
    }
}

/// Execute job commands
pub async fn execute(args: &JobArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let db = super::create_db_pool(&config).await?;
    let service = JobService::new(
        Arc::new(JobRepository::new(db.pool().clone())),
        Arc::new(ShortIdGenerator::new()),
    );

    let result = match &args.command {
        JobCommand::List => service.list().await.map(|jobs| {
            let rows: Vec<JobRow> = jobs.into_iter().map(JobRow::from).collect();
            output::print_list(&rows, cli.format);
        }),
        JobCommand::Add(add) => service.store(add.into()).await.map(|job| {
            output::print_success(&format!("Job '{}' stored", job.id));
        }),
    };

    db.close().await;
    result
}
