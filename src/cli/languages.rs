//! Languages command - list loaded corpora

use super::Settings;
use anyhow::Result;
use console::style;

/// Run the languages command
pub fn run(settings: &Settings) -> Result<()> {
    let dir = settings.config.corpora_dir(&settings.base_dir);
    let corpora = settings.load_corpora()?;

    if corpora.is_empty() {
        println!(
            "  {} No corpora in {}",
            style("[--]").dim(),
            style(dir.display()).cyan()
        );
        return Ok(());
    }

    let options = settings.profile_options();
    println!("\nCorpora in {}", style(dir.display()).cyan());
    println!(
        "  k-gram length {}, boundary {}, top-k {}\n",
        options.kgram_length,
        options.boundary.name(),
        options
            .top_k
            .map_or_else(|| "off".to_string(), |k| k.to_string())
    );
    for corpus in &corpora {
        println!(
            "  {:<20} {} k-grams",
            corpus.name,
            style(corpus.profile.len()).dim()
        );
    }
    println!("\n  {} languages", style(corpora.len()).bold());
    Ok(())
}
