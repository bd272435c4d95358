use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// External test runner invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RunnerConfig {
    /// Program to execute.
    pub program: String,
    /// Arguments placed before the test-file identifiers.
    pub args: Vec<String>,
    /// Reporter selection passed through to the runner.
    pub reporter: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["playwright".to_string(), "test".to_string()],
            reporter: "line,json".to_string(),
        }
    }
}

/// Report generation and viewing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportConfig {
    /// Report generator/viewer program.
    pub program: String,
    /// Open the generated report in the viewer afterwards.
    pub open: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            program: "allure".to_string(),
            open: true,
        }
    }
}

/// All filesystem locations and collaborator invocations, constructed once
/// at startup and passed down. Relative paths resolve against the
/// invocation directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Canonical result-set directory.
    pub results_dir: PathBuf,
    /// Archive searched for embedded result directories when the canonical
    /// one is absent.
    pub report_archive_dir: PathBuf,
    /// Aggregated run-summary document, the fallback result format.
    pub summary_file: PathBuf,
    /// Isolated output location for rerun artifacts.
    pub rerun_results_dir: PathBuf,
    /// Report generator output directory.
    pub report_output_dir: PathBuf,
    pub runner: RunnerConfig,
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("allure-results"),
            report_archive_dir: PathBuf::from("reports"),
            summary_file: PathBuf::from("results.json"),
            rerun_results_dir: PathBuf::from("rerun-results"),
            report_output_dir: PathBuf::from("allure-report"),
            runner: RunnerConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".rerunner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("rerunner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Loads the nearest config file at or above `start_path`, or defaults
    /// when there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }
}
