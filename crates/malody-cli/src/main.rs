mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over the defaults
    let default_level = if args.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "malody_cli={level},malody_core={level}",
            level = default_level
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Check { files } => commands::check::run(&files),
        Command::Wire { file, pretty } => commands::wire::run(&file, pretty),
        Command::Modes { values, encode } => commands::modes::run(&values, encode),
    }
}
