//! CLI argument definitions for malody.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "malody")]
#[command(about = "Malody chart inspector", version)]
pub struct Args {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load charts and report what they contain
    Check {
        /// Chart files (JSON)
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Print the re-serialized wire document of a chart
    Wire {
        /// Chart file (JSON)
        file: String,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Decode a mode bit value, or encode modes into one
    Modes {
        /// Bit value, or mode names/IDs with --encode
        #[arg(required = true)]
        values: Vec<String>,
        /// Combine the given modes into a bit value
        #[arg(long)]
        encode: bool,
    },
}
