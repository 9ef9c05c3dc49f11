//! Command-line interface.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "sitelog-admin")]
#[command(about = "Operator commands for the site event store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Create the events table and its indexes if they do not exist.
    InitSchema,
    /// Print a site's events as JSON lines, oldest first.
    History {
        /// The site identifier.
        site_id: Uuid,

        /// First version to include.
        #[arg(long)]
        from: Option<i64>,

        /// Last version to include.
        #[arg(long)]
        to: Option<i64>,
    },
}

impl Command {
    /// Rejects argument combinations clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidArgument` if a history range is empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Self::History {
            from: Some(from),
            to: Some(to),
            ..
        } = self
            && from > to
        {
            return Err(AppError::InvalidArgument(format!(
                "--from {from} is after --to {to}"
            )));
        }
        Ok(())
    }
}
