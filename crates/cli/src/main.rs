use anyhow::Result;
use clap::Parser;

use rerunner::cli::{Cli, Commands};
use rerunner::commands::{failures_command, init_command, report_command, rerun_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Rerun { dry_run, no_report } => rerun_command(config, dry_run, no_report),
        Commands::Failures { json } => failures_command(config, json),
        Commands::Report => report_command(config),
        Commands::Init { force } => init_command(force),
    }
}
