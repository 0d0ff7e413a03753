//! # mado CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps onto a tracing env-filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mado_cli::{run_validate, ValidateArgs};

/// MADO Stack CLI.
///
/// Validates manifest documents against conformance profiles and reports
/// categorized findings.
#[derive(Parser, Debug)]
#[command(name = "mado", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a manifest document against a conformance profile.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_validate_with_profile() {
        let cli = Cli::try_parse_from([
            "mado",
            "validate",
            "doc.json",
            "--profile",
            "manifest-with-description",
        ])
        .unwrap();
        let Commands::Validate(args) = cli.command;
        assert_eq!(args.profile, "manifest-with-description");
    }

    #[test]
    fn verbosity_flag_accumulates() {
        let cli = Cli::try_parse_from(["mado", "-vv", "validate", "doc.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
