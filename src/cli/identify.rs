//! Identify command - guess the language of each input

use super::{read_input, Settings};
use anyhow::{Context, Result};
use console::style;
use rayon::prelude::*;
use rosetta::corpus::CorpusSet;
use rosetta::profile::{profile_text, ProfileOptions};
use rosetta::similarity::{cosine_similarity, guess_language};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Debug, Serialize)]
struct Identification {
    input: String,
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

/// Run the identify command
pub fn run(settings: &Settings, inputs: &[PathBuf], format: &str, scores: bool) -> Result<()> {
    let corpora = settings.load_corpora()?;
    let options = settings.profile_options();

    let texts = read_inputs(inputs)?;

    let start = Instant::now();
    let results = texts
        .par_iter()
        .map(|(name, text)| identify(name, text, &options, &corpora, scores))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "Identified {} inputs against {} corpora in {:?}",
        results.len(),
        corpora.len(),
        start.elapsed()
    );

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let single = results.len() == 1;
    for result in &results {
        let mut line = if single {
            style(&result.language).green().bold().to_string()
        } else {
            format!(
                "{}: {}",
                style(&result.input).dim(),
                style(&result.language).green().bold()
            )
        };
        if let Some(score) = result.score {
            line.push_str(&format!(" ({:.4})", score));
        }
        println!("{}", line);
    }
    Ok(())
}

/// Read every input before fanning out. Stdin is read once and its text
/// reused for every further `-`.
fn read_inputs(inputs: &[PathBuf]) -> Result<Vec<(String, String)>> {
    let mut stdin_text: Option<String> = None;
    let mut texts = Vec::with_capacity(inputs.len());
    for path in inputs {
        let text = if path == Path::new("-") {
            match &stdin_text {
                Some(text) => text.clone(),
                None => stdin_text.insert(read_input(path)?).clone(),
            }
        } else {
            read_input(path)?
        };
        texts.push((path.display().to_string(), text));
    }
    Ok(texts)
}

fn identify(
    name: &str,
    text: &str,
    options: &ProfileOptions,
    corpora: &CorpusSet,
    with_score: bool,
) -> Result<Identification> {
    let profile =
        profile_text(text, options).with_context(|| format!("Failed to profile {}", name))?;
    let language = guess_language(&profile, corpora)
        .with_context(|| format!("Failed to identify {}", name))?;
    let score = with_score.then(|| {
        corpora
            .get(&language)
            .map(|corpus| cosine_similarity(&profile, &corpus.profile))
            .unwrap_or(0.0)
    });

    Ok(Identification {
        input: name.to_string(),
        language,
        score,
    })
}
