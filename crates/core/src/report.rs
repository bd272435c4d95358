//! Triggers the external report generator and viewer

use std::path::Path;

use tracing::info;

use crate::command::ExternalCommand;
use crate::config::Config;
use crate::error::{Error, Result};

/// Builds the report-generation invocation over `results_dir`.
pub fn generate_command(config: &Config, results_dir: &Path) -> ExternalCommand {
    ExternalCommand::new(
        config.report.program.clone(),
        vec![
            "generate".to_string(),
            results_dir.display().to_string(),
            "--clean".to_string(),
            "-o".to_string(),
            config.report_output_dir.display().to_string(),
        ],
    )
}

/// Builds the viewer invocation for the generated report.
pub fn open_command(config: &Config) -> ExternalCommand {
    ExternalCommand::new(
        config.report.program.clone(),
        vec![
            "open".to_string(),
            config.report_output_dir.display().to_string(),
        ],
    )
}

/// Generates the report over the merged result set, then opens the viewer
/// when configured to. Both collaborators are black boxes; a non-zero exit
/// maps to [`Error::ReportFailed`].
pub fn trigger(config: &Config, results_dir: &Path) -> Result<()> {
    let generate = generate_command(config, results_dir);
    info!("generating report: {}", generate.to_shell_command());
    let status = generate.execute()?;
    if !status.success() {
        return Err(Error::ReportFailed {
            code: status.code().unwrap_or(1),
        });
    }

    if config.report.open {
        let open = open_command(config);
        info!("opening report: {}", open.to_shell_command());
        let status = open.execute()?;
        if !status.success() {
            return Err(Error::ReportFailed {
                code: status.code().unwrap_or(1),
            });
        }
    }

    Ok(())
}
