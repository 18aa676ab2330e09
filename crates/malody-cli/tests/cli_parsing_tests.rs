//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "malody")]
struct Args {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Check {
        #[arg(required = true)]
        files: Vec<String>,
    },
    Wire {
        file: String,
        #[arg(long)]
        pretty: bool,
    },
    Modes {
        #[arg(required = true)]
        values: Vec<String>,
        #[arg(long)]
        encode: bool,
    },
}

#[test]
fn test_parse_no_args_fails() {
    assert!(Args::try_parse_from(["malody"]).is_err());
}

#[test]
fn test_parse_check_many_files() {
    let args = Args::try_parse_from(["malody", "check", "a.mc", "b.mc"]).unwrap();
    match args.command {
        Command::Check { files } => assert_eq!(files, vec!["a.mc", "b.mc"]),
        _ => panic!("Expected Check command"),
    }
    assert!(!args.verbose);
}

#[test]
fn test_parse_check_requires_file() {
    assert!(Args::try_parse_from(["malody", "check"]).is_err());
}

#[test]
fn test_parse_wire_pretty() {
    let args = Args::try_parse_from(["malody", "wire", "chart.mc", "--pretty"]).unwrap();
    match args.command {
        Command::Wire { file, pretty } => {
            assert_eq!(file, "chart.mc");
            assert!(pretty);
        }
        _ => panic!("Expected Wire command"),
    }
}

#[test]
fn test_parse_modes_encode() {
    let args = Args::try_parse_from(["malody", "modes", "--encode", "Key", "5"]).unwrap();
    match args.command {
        Command::Modes { values, encode } => {
            assert_eq!(values, vec!["Key", "5"]);
            assert!(encode);
        }
        _ => panic!("Expected Modes command"),
    }
}

#[test]
fn test_parse_global_verbose() {
    let args = Args::try_parse_from(["malody", "modes", "17", "-v"]).unwrap();
    assert!(args.verbose);
}
