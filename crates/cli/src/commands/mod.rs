pub mod failures;
pub mod init;
pub mod report;
pub mod rerun;

pub use failures::failures_command;
pub use init::init_command;
pub use report::report_command;
pub use rerun::rerun_command;

use std::path::Path;

use anyhow::{Context, Result};
use rerunner_core::Config;

/// Loads the explicit config file when given, otherwise discovers the
/// nearest one above the working directory, falling back to defaults.
pub(crate) fn load_config(explicit: Option<&str>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}")),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Config::discover(&cwd).context("Failed to load configuration")
        }
    }
}
