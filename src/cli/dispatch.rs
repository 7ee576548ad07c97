//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_config, handle_ignore_all, handle_lint, handle_select},
};
use crate::exit::DesignLintExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<DesignLintExit> {
    match command {
        Commands::Lint { input, json } => handle_lint(&input, json),
        Commands::IgnoreAll { input, index } => handle_ignore_all(&input, index),
        Commands::Select { input, index, node } => handle_select(&input, index, node.as_deref()),
        Commands::Config { profile } => handle_config(profile),
    }
}
