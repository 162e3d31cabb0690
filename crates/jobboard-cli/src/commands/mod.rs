//! CLI command definitions and dispatch.

pub mod config;
pub mod job;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::DatabasePool;

/// JobBoard: store and list job postings
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay loaded next to the configuration file
    #[arg(short, long, env = "JOBBOARD_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the JobBoard server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Store and list job postings
    Job(job::JobArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, self).await,
            Commands::Migrate(args) => migrate::execute(args, self).await,
            Commands::Config(args) => config::execute(args, self).await,
            Commands::Job(args) => job::execute(args, self).await,
        }
    }

    /// Load configuration from the file and environment overlay
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(&self.config, &self.env)
    }
}

/// Helper: connect the database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
