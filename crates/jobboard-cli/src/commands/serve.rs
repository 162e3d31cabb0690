//! Start the JobBoard server.

use clap::Args;

use jobboard_core::error::AppError;

use super::Cli;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, cli: &Cli) -> Result<(), AppError> {
    let mut config = cli.load_config()?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting JobBoard server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let db = super::create_db_pool(&config).await?;

    if args.auto_migrate {
        println!("Running database migrations...");
        jobboard_database::migration::run_migrations(db.pool()).await?;
        println!("  Migrations applied successfully.");
    }

    jobboard_api::run_server(config, db).await
}
