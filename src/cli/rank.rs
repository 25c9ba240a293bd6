//! Rank command - score a text against every corpus

use super::{read_input, Settings};
use anyhow::{Context, Result};
use console::style;
use rosetta::profile::profile_text;
use rosetta::similarity::rank_languages;
use std::path::Path;

/// Run the rank command
pub fn run(settings: &Settings, input: &Path, top: Option<usize>, format: &str) -> Result<()> {
    let corpora = settings.load_corpora()?;
    if corpora.is_empty() {
        anyhow::bail!(
            "No corpora loaded from {}",
            settings.config.corpora_dir(&settings.base_dir).display()
        );
    }

    let text = read_input(input)?;
    let profile = profile_text(&text, &settings.profile_options())
        .with_context(|| format!("Failed to profile {}", input.display()))?;

    let mut matches = rank_languages(&profile, &corpora);
    if let Some(n) = top {
        matches.truncate(n);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    let width = matches
        .iter()
        .map(|m| m.language.chars().count())
        .max()
        .unwrap_or(0);
    for (i, m) in matches.iter().enumerate() {
        let label = format!("{:<width$}", m.language, width = width);
        let label = if i == 0 {
            style(label).green().bold()
        } else {
            style(label)
        };
        println!("{:>3}. {}  {:.4}", i + 1, label, m.score);
    }
    Ok(())
}
