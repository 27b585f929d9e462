//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Repolens - joins the raw study sources into one dataset and renders
/// the descriptive figures
#[derive(Parser, Debug)]
#[command(name = "rl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the data directory holding raw_data/, datasets/ and figures/
    #[arg(short = 'd', long, global = true, default_value = ".")]
    pub data_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join the five raw sources into the flat dataset CSV
    Aggregate,

    /// Render the descriptive figures from the dataset CSV
    Figures,

    /// Aggregate the dataset, then render the figures
    Run,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
