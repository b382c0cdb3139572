//! Command-line front end for depset.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::{CliError, Result};

use cli::{Cli, Commands};

/// Runs the parsed command and returns its stdout text.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Configure(args) => commands::configure(args),
        Commands::DisplaySet { config } => commands::display_set(config.as_deref()),
    }
}
