//! Sitelog admin CLI entry point.

use std::io::Write;

use clap::Parser;
use sitelog_admin::cli::{Cli, Command};
use sitelog_admin::config::Config;
use sitelog_admin::error::AppError;
use sitelog_admin::history::load_history;
use sitelog_admin::schema::init_schema;
use sitelog_event_store::PgEventStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr so history output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    cli.command.validate()?;

    let config = Config::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    match cli.command {
        Command::InitSchema => init_schema(&pool).await?,
        Command::History { site_id, from, to } => {
            let store = PgEventStore::new(pool);
            let lines = load_history(&store, site_id, from, to).await?;

            let mut out = std::io::stdout().lock();
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
    }

    Ok(())
}
