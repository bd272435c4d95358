use anyhow::{Context, Result};

use rerunner_core::report;

use super::load_config;

pub fn report_command(config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;

    println!("📊 Generating report from {}", config.results_dir.display());
    report::trigger(&config, &config.results_dir).context("Failed to generate report")?;
    println!("✅ Report written to {}", config.report_output_dir.display());

    Ok(())
}
