//! `jobboard` command-line tool: run the server, migrate the schema,
//! inspect configuration and manage postings from a shell.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobboard_core::error::{AppError, ErrorKind};

mod commands;
mod output;

use commands::Cli;

/// Used when `RUST_LOG` is unset: quiet, except for server lifecycle events.
const DEFAULT_FILTER: &str = "warn,jobboard_api=info,jobboard_database=info";

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        output::print_error(&e.message);
        std::process::exit(exit_code(&e));
    }
}

/// Configuration problems exit with 2, everything else with 1.
fn exit_code(err: &AppError) -> i32 {
    match err.kind {
        ErrorKind::Configuration => 2,
        _ => 1,
    }
}
