//! End-to-end pipeline: locate, extract, rerun, merge, report

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::extract::{self, ExtractionStrategy};
use crate::merge::merge_results;
use crate::report;
use crate::rerun;
use crate::results::locator::{self, ResultSource};

/// The failure list together with where it came from and where rerun
/// artifacts must be merged back to.
#[derive(Debug, Clone)]
pub struct FailurePlan {
    /// Deduplicated test files to rerun, first-seen order.
    pub identifiers: Vec<String>,
    /// Which extraction strategy produced the list.
    pub strategy: ExtractionStrategy,
    /// Merge and report target: the discovered result directory, or the
    /// canonical location when extraction fell back to the summary.
    pub results_dir: PathBuf,
}

/// Successful pipeline outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No result set found, or no terminal failures in it. The remaining
    /// stages were not invoked.
    NothingToRerun,
    /// Reran `count` test files and merged `merged` artifacts.
    Reran { count: usize, merged: usize },
}

/// Coordinates the sequential stages over one shared [`Config`].
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locates the result set and derives the failure list. Read-only;
    /// safe to call for listing without triggering a rerun.
    pub fn plan(&self) -> Result<FailurePlan> {
        let source = locator::locate(&self.config)?;
        match &source {
            Some(source) => info!("found result set at {}", source.path().display()),
            None => info!("no result set found; nothing to extract"),
        }

        let results_dir = source.as_ref().map(ResultSource::path);
        let (identifiers, strategy) =
            extract::extract_failures(results_dir, &self.config.summary_file)?;

        Ok(FailurePlan {
            results_dir: results_dir
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.config.results_dir.clone()),
            identifiers,
            strategy,
        })
    }

    /// Reruns the planned failures, merges their artifacts and triggers
    /// the report.
    ///
    /// A still-failing rerun does not short-circuit: its artifacts are
    /// merged and the report regenerated first, so the report reflects
    /// both runs, and the runner error is propagated afterwards.
    pub fn execute(&self, plan: &FailurePlan, skip_report: bool) -> Result<Outcome> {
        if plan.identifiers.is_empty() {
            info!("nothing to rerun");
            return Ok(Outcome::NothingToRerun);
        }
        info!(
            "rerunning {} test file(s) extracted via {:?}",
            plan.identifiers.len(),
            plan.strategy
        );

        rerun::prepare_output_dir(&self.config)?;
        let command = rerun::build_command(&self.config, &plan.identifiers);
        let rerun_outcome = rerun::execute(&command);

        let merged = merge_results(&self.config.rerun_results_dir, &plan.results_dir)?;
        info!(
            "merged {merged} rerun artifact(s) into {}",
            plan.results_dir.display()
        );

        if !skip_report {
            report::trigger(&self.config, &plan.results_dir)?;
        }

        rerun_outcome?;
        Ok(Outcome::Reran {
            count: plan.identifiers.len(),
            merged,
        })
    }

    /// The whole pipeline in one call.
    pub fn run(&self, skip_report: bool) -> Result<Outcome> {
        let plan = self.plan()?;
        self.execute(&plan, skip_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(root: &Path) -> Config {
        let mut config = Config::default();
        config.results_dir = root.join("allure-results");
        config.report_archive_dir = root.join("reports");
        config.summary_file = root.join("results.json");
        config.rerun_results_dir = root.join("rerun-results");
        config.report_output_dir = root.join("allure-report");
        config
    }

    #[test]
    fn test_empty_workspace_is_nothing_to_rerun() {
        let temp = TempDir::new().unwrap();
        let pipeline = Pipeline::new(config_in(temp.path()));

        let outcome = pipeline.run(true).unwrap();
        assert_eq!(outcome, Outcome::NothingToRerun);
        // The orchestrator never ran, so no rerun directory was prepared.
        assert!(!temp.path().join("rerun-results").exists());
    }

    #[test]
    fn test_all_passed_is_nothing_to_rerun() {
        let temp = TempDir::new().unwrap();
        let config = config_in(temp.path());
        fs::create_dir_all(&config.results_dir).unwrap();
        fs::write(
            config.results_dir.join("a-result.json"),
            r#"{"status": "passed", "testFile": "tests/a.spec.js"}"#,
        )
        .unwrap();

        let outcome = Pipeline::new(config).run(true).unwrap();
        assert_eq!(outcome, Outcome::NothingToRerun);
    }

    #[cfg(unix)]
    #[test]
    fn test_rerun_outcome_counts_identifiers() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(temp.path());
        // A runner that accepts any arguments and produces no artifacts.
        config.runner.program = "true".to_string();
        config.runner.args = Vec::new();

        fs::create_dir_all(&config.results_dir).unwrap();
        fs::write(
            config.results_dir.join("a-result.json"),
            r#"{"status": "failed", "testFile": "tests/a.spec.js"}"#,
        )
        .unwrap();

        let outcome = Pipeline::new(config).run(true).unwrap();
        assert_eq!(outcome, Outcome::Reran { count: 1, merged: 0 });
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_rerun_still_merges_before_failing() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(temp.path());
        config.runner.program = "false".to_string();
        config.runner.args = Vec::new();

        fs::create_dir_all(&config.results_dir).unwrap();
        fs::write(
            config.results_dir.join("a-result.json"),
            r#"{"status": "failed", "testFile": "tests/a.spec.js"}"#,
        )
        .unwrap();

        let pipeline = Pipeline::new(config);
        let result = pipeline.run(true);

        assert!(matches!(result, Err(Error::RunnerFailed { .. })));
        // The isolated rerun directory was still prepared and merged
        // (empty, since `false` produced nothing).
        assert!(temp.path().join("rerun-results").is_dir());
    }
}
