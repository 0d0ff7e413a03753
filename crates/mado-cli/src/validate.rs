//! The `mado validate` subcommand.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use mado_conformance::{validate, ValidationProfile, ValidationResult};
use mado_core::ManifestDocument;

/// Exit code for a document that validated cleanly.
pub const EXIT_VALID: u8 = 0;
/// Exit code for a document with error findings.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for input too malformed to diagnose.
pub const EXIT_MALFORMED: u8 = 2;

/// Arguments of `mado validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON-materialized manifest document.
    pub document: PathBuf,

    /// Conformance profile to validate against.
    #[arg(long, default_value = "manifest")]
    pub profile: String,

    /// Output format for the finding lists.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// How findings are rendered.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, errors first.
    Text,
    /// The serialization contract: three JSON lists.
    Json,
}

/// Run the validate subcommand; returns the process exit code.
///
/// # Errors
///
/// Returns an error for usage problems (unknown profile, unreadable or
/// undecodable document). Conformance findings are not errors — they are
/// rendered and reflected in the exit code.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<u8> {
    let profile: ValidationProfile = args.profile.parse()?;

    let raw = std::fs::read_to_string(&args.document)
        .with_context(|| format!("failed to read {}", args.document.display()))?;
    let document = ManifestDocument::from_json_str(&raw)
        .with_context(|| format!("failed to decode {}", args.document.display()))?;

    let result = match validate(&document, profile) {
        Ok(result) => result,
        Err(malformed) => {
            tracing::error!("malformed input: {malformed}");
            eprintln!("malformed input: {malformed}");
            return Ok(EXIT_MALFORMED);
        }
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(if result.is_valid() {
        EXIT_VALID
    } else {
        EXIT_INVALID
    })
}

/// Render findings as a human-readable report, errors first.
fn render_text(result: &ValidationResult) -> String {
    let mut report = String::new();
    for finding in result.iter() {
        report.push_str(&finding.to_string());
        report.push('\n');
    }
    report.push_str(&format!(
        "{} error(s), {} warning(s), {} note(s)\n",
        result.errors().len(),
        result.warnings().len(),
        result.info().len()
    ));
    report
}
