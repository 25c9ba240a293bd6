//! Build corpora from a directory of sample texts
//!
//! Each `<Language>.txt` file holds raw text in one language. Samples are
//! profiled in parallel with the same [`ProfileOptions`] later used for the
//! text being identified.

use super::{Corpus, CorpusSet};
use crate::profile::{profile_text, ProfileError, ProfileOptions};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SAMPLE_EXTENSION: &str = "txt";

/// Load one corpus per `.txt` file in `dir`.
///
/// Samples too short to yield a single k-gram are skipped with a warning.
/// Any I/O failure aborts the whole load.
pub fn load_corpora(dir: &Path, options: &ProfileOptions) -> Result<CorpusSet> {
    let samples = sample_files(dir)?;
    debug!("Found {} corpus samples in {}", samples.len(), dir.display());

    let profiled: Vec<Option<Corpus>> = samples
        .par_iter()
        .map(|(name, path)| load_sample(name, path, options))
        .collect::<Result<_>>()?;

    let corpora: CorpusSet = profiled.into_iter().flatten().collect();
    info!(
        "Loaded {} corpora from {} (k-gram length {})",
        corpora.len(),
        dir.display(),
        options.kgram_length
    );
    Ok(corpora)
}

/// `(label, path)` for every sample, sorted by label
fn sample_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read corpus directory: {}", dir.display()))?;

    let mut samples = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SAMPLE_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!("Skipping corpus file with non UTF-8 name: {}", path.display());
            continue;
        };
        if stem.is_empty() || stem.starts_with('.') {
            continue;
        }
        samples.push((stem.to_string(), path.clone()));
    }

    samples.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(samples)
}

fn load_sample(name: &str, path: &Path, options: &ProfileOptions) -> Result<Option<Corpus>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus sample: {}", path.display()))?;

    match profile_text(&text, options) {
        Ok(profile) if profile.is_empty() => {
            warn!("Corpus {} keeps no k-grams, skipping", name);
            Ok(None)
        }
        Ok(profile) => {
            debug!("Corpus {}: {} k-grams", name, profile.len());
            Ok(Some(Corpus::new(name, profile)))
        }
        Err(ProfileError::EmptyInput(_)) => {
            warn!(
                "Corpus sample {} is shorter than the k-gram length ({}), skipping",
                path.display(),
                options.kgram_length
            );
            Ok(None)
        }
        Err(e) => {
            Err(anyhow::Error::new(e).context(format!("Failed to profile {}", path.display())))
        }
    }
}
