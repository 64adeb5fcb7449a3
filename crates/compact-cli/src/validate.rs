//! # Validate Subcommand
//!
//! Parse-only check of a provider payload document. Field-level problems
//! (unknown statuses, malformed dates) surface as tracing warnings; only a
//! structurally malformed document fails the command.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use compact_provider::parse_provider_document;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the provider payload JSON document.
    #[arg(long)]
    pub input: PathBuf,
}

/// Parse the payload and report what it contained.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let licensee = parse_provider_document(&json)?;

    println!(
        "{}: ok ({} licenses, {} privileges, {} military affiliations)",
        args.input.display(),
        licensee.licenses.len(),
        licensee.privileges.len(),
        licensee.military_affiliations.len()
    );
    Ok(())
}
