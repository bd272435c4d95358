use anyhow::Result;
use tracing::debug;

use rerunner_core::{Error, Outcome, Pipeline, rerun};

use super::load_config;

pub fn rerun_command(config_path: Option<&str>, dry_run: bool, no_report: bool) -> Result<()> {
    let config = load_config(config_path)?;
    debug!("rerun with results_dir={}", config.results_dir.display());

    let pipeline = Pipeline::new(config);

    println!("🔍 Searching for the latest result set");
    let plan = pipeline.plan()?;

    if plan.identifiers.is_empty() {
        println!("✅ Nothing to rerun");
        return Ok(());
    }

    println!("🔁 {} test file(s) to rerun:", plan.identifiers.len());
    for identifier in &plan.identifiers {
        println!("   {identifier}");
    }

    if dry_run {
        let command = rerun::build_command(pipeline.config(), &plan.identifiers);
        println!("{}", command.to_shell_command());
        return Ok(());
    }

    match pipeline.execute(&plan, no_report) {
        Ok(Outcome::Reran { count, merged }) => {
            println!("✅ Reran {count} test file(s), merged {merged} artifact(s)");
            Ok(())
        }
        Ok(Outcome::NothingToRerun) => {
            println!("✅ Nothing to rerun");
            Ok(())
        }
        Err(Error::RunnerFailed { code }) => {
            // Artifacts were already merged and the report regenerated;
            // surface the still-failing rerun through the exit code.
            eprintln!("❌ Rerun still failing (runner exit {code})");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
