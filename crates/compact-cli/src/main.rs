//! # compact CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Compact Licensure Stack CLI.
///
/// Validates provider payload documents and renders licensee status
/// reports from them.
#[derive(Parser, Debug)]
#[command(name = "compact", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Render a licensee status report from a provider payload.
    Status(compact_cli::status::StatusArgs),
    /// Check that a provider payload parses.
    Validate(compact_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status(args) => compact_cli::status::run(args),
        Commands::Validate(args) => compact_cli::validate::run(args),
    }
}
