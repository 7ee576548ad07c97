use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Profile;
use crate::types::Category;

#[derive(Parser)]
#[command(name = "designlint", version, about = "Design-system linter for design node snapshots")]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inputs shared by every command that evaluates nodes.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Snapshot files or directories of `*.json` snapshots
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
    /// Rule profile: "default" or "docv" (overrides designlint.toml)
    #[arg(long, value_parser = parse_profile)]
    pub profile: Option<Profile>,
    /// Approved design-token table (overrides designlint.toml)
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
    /// JSON file of ignored errors
    #[arg(long, value_name = "FILE")]
    pub ignored: Option<PathBuf>,
    /// Only show these categories (repeatable); default shows all
    #[arg(long, short, value_parser = parse_category)]
    pub filter: Vec<Category>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint node snapshots and print grouped errors
    Lint {
        #[command(flatten)]
        input: InputArgs,
        /// Emit the aggregated report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ignore every error matching the bulk entry at INDEX
    IgnoreAll {
        #[command(flatten)]
        input: InputArgs,
        /// Position in the (filtered) bulk list, as printed by `lint`
        #[arg(long)]
        index: usize,
    },
    /// Emit the host message selecting every node of the bulk entry at INDEX
    Select {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        index: usize,
        /// Select only this node of the entry
        #[arg(long)]
        node: Option<String>,
    },
    /// Print the effective configuration
    Config {
        #[arg(long, value_parser = parse_profile)]
        profile: Option<Profile>,
    },
}

fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse().map_err(|e: crate::error::DesignLintError| e.to_string())
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: crate::error::DesignLintError| e.to_string())
}
