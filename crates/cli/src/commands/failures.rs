use anyhow::Result;

use rerunner_core::Pipeline;

use super::load_config;

pub fn failures_command(config_path: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let plan = Pipeline::new(config).plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan.identifiers)?);
        return Ok(());
    }

    if plan.identifiers.is_empty() {
        println!("✅ No failed tests in the latest result set");
    } else {
        println!(
            "🔁 {} test file(s) eligible for rerun:",
            plan.identifiers.len()
        );
        for identifier in &plan.identifiers {
            println!("   {identifier}");
        }
    }

    Ok(())
}
