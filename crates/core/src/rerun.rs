//! Re-executes failed test files through the external runner

use std::fs;

use tracing::{debug, info};

use crate::command::ExternalCommand;
use crate::config::Config;
use crate::error::{Error, Result};

/// Builds the runner invocation for the given identifiers: the files as
/// positional arguments, a single worker, the configured reporter and the
/// isolated output location. Parallelism is collapsed to one worker since
/// reruns target flaky, order-sensitive failures.
pub fn build_command(config: &Config, identifiers: &[String]) -> ExternalCommand {
    let mut args = config.runner.args.clone();
    args.extend(identifiers.iter().cloned());
    args.push("--workers=1".to_string());
    args.push(format!("--reporter={}", config.runner.reporter));
    args.push(format!("--output={}", config.rerun_results_dir.display()));

    ExternalCommand::new(config.runner.program.clone(), args)
}

/// Clears stale artifacts from a prior invocation and recreates the
/// isolated rerun output directory.
pub fn prepare_output_dir(config: &Config) -> Result<()> {
    if config.rerun_results_dir.exists() {
        debug!(
            "clearing stale rerun artifacts in {}",
            config.rerun_results_dir.display()
        );
        fs::remove_dir_all(&config.rerun_results_dir)?;
    }
    fs::create_dir_all(&config.rerun_results_dir)?;
    Ok(())
}

/// Runs the rerun as a blocking subprocess. A non-zero exit (some tests
/// still failing) surfaces as [`Error::RunnerFailed`]; it is the caller's
/// decision when to propagate it.
pub fn execute(command: &ExternalCommand) -> Result<()> {
    info!("rerunning: {}", command.to_shell_command());
    let status = command.execute()?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::RunnerFailed {
            code: status.code().unwrap_or(1),
        })
    }
}
