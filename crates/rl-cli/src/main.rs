//! Repolens CLI - microservice dataset aggregation and figure rendering

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{aggregate, figures, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        cli::Commands::Aggregate => aggregate::execute(&cli.global),
        cli::Commands::Figures => figures::execute(&cli.global),
        cli::Commands::Run => run::execute(&cli.global),
    }
}
