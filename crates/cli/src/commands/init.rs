use std::env;

use anyhow::{Context, Result};

use rerunner_core::Config;

pub fn init_command(force: bool) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config_path = cwd.join(".rerunner.json");

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .context("Failed to write default configuration")?;

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Adjust results_dir and runner to match your project layout");
    Ok(())
}
