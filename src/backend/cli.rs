//! Command-line interface for the server binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "planetary-api", version, about = "Planetary API server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Create the users and planets tables
    DbCreate,
    /// Drop the users and planets tables
    DbDrop,
    /// Insert the sample planets and user
    DbSeed,
}

impl Cli {
    /// The chosen subcommand, `serve` when none was given
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
