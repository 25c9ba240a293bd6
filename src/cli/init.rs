//! Init command - write an example config file

use anyhow::{Context, Result};
use console::style;
use rosetta::config::{CONFIG_FILENAME, EXAMPLE_CONFIG};
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\nPut one <Language>.txt sample per language in {} and run {}",
        style("corpora/").cyan(),
        style("rosetta identify <file>").cyan()
    );
    Ok(())
}
