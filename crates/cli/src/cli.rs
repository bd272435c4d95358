use clap::{Parser, Subcommand};

/// Rerun failed end-to-end tests and fold the results into one report
#[derive(Parser)]
#[command(name = "rerunner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Explicit config file (defaults to the nearest .rerunner.json)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract failed tests, rerun them and regenerate the report
    #[command(visible_alias = "r")]
    Rerun {
        /// Print the runner invocation without executing anything
        #[arg(short = 'd', long = "dry-run")]
        dry_run: bool,

        /// Skip report generation after the merge
        #[arg(long = "no-report")]
        no_report: bool,
    },
    /// List the test files whose latest outcome is failed, skipped or broken
    #[command(visible_alias = "f")]
    Failures {
        /// Print the list as a JSON array
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
    /// Generate and open the report over the current result set
    Report,
    /// Write a default .rerunner.json into the current directory
    Init {
        /// Force overwrite an existing configuration file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}
