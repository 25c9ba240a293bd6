//! Profile command - show the k-gram profile of a text

use super::{read_input, Settings};
use anyhow::{Context, Result};
use console::style;
use rosetta::profile::profile_text;
use std::path::Path;

/// Run the profile command
pub fn run(settings: &Settings, input: &Path, format: &str) -> Result<()> {
    let text = read_input(input)?;
    let profile = profile_text(&text, &settings.profile_options())
        .with_context(|| format!("Failed to profile {}", input.display()))?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    for (kgram, weight) in profile.ranked() {
        // quotes make leading/trailing spaces visible
        println!("{:>12}  {:.6}", style(format!("{:?}", kgram)).cyan(), weight);
    }
    println!("\n{} k-grams", style(profile.len()).bold());
    Ok(())
}
