//! Configuration for rosetta
//!
//! Loaded from `rosetta.toml` in the working directory, or from the file
//! named by `--config`. Command-line flags override file values, which
//! override the built-in defaults.
//!
//! ```toml
//! # rosetta.toml
//!
//! [profile]
//! kgram_length = 3
//! top_k = 500
//! prune = true
//! boundary = "complete"   # or "trailing-fragments"
//!
//! [corpora]
//! path = "corpora"
//! ```

use crate::profile::{Boundary, ProfileOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = "rosetta.toml";

/// Example file written by `rosetta init`
pub const EXAMPLE_CONFIG: &str = r#"# rosetta configuration

[profile]
# Characters per k-gram. Text and corpora are always profiled with the same value.
kgram_length = 3

# K-grams kept per profile after normalizing (heaviest first)
top_k = 500

# Set to false to keep every k-gram
prune = true

# "complete" counts only full k-grams; "trailing-fragments" also counts the
# shorter fragments that start in the last kgram_length - 1 characters
boundary = "complete"

[corpora]
# Directory of <Language>.txt sample files
path = "corpora"
"#;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RosettaConfig {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub corpora: CorporaConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_kgram_length")]
    pub kgram_length: usize,

    #[serde(default = "default_top_k")]
    pub top_k: i64,

    /// Whether `top_k` applies at all
    #[serde(default = "default_prune")]
    pub prune: bool,

    #[serde(default)]
    pub boundary: Boundary,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            kgram_length: default_kgram_length(),
            top_k: default_top_k(),
            prune: default_prune(),
            boundary: Boundary::default(),
        }
    }
}

fn default_kgram_length() -> usize {
    ProfileOptions::DEFAULT_KGRAM_LENGTH
}

fn default_top_k() -> i64 {
    ProfileOptions::DEFAULT_TOP_K
}

fn default_prune() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorporaConfig {
    #[serde(default = "default_corpora_path")]
    pub path: PathBuf,
}

impl Default for CorporaConfig {
    fn default() -> Self {
        Self {
            path: default_corpora_path(),
        }
    }
}

fn default_corpora_path() -> PathBuf {
    PathBuf::from("corpora")
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub kgram_length: Option<usize>,
    pub top_k: Option<i64>,
    pub no_prune: bool,
    pub boundary: Option<Boundary>,
    pub corpora: Option<PathBuf>,
}

impl RosettaConfig {
    /// Apply command-line values on top of the file/default values
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(length) = overrides.kgram_length {
            self.profile.kgram_length = length;
        }
        if let Some(keep) = overrides.top_k {
            self.profile.top_k = keep;
        }
        if overrides.no_prune {
            self.profile.prune = false;
        }
        if let Some(boundary) = overrides.boundary {
            self.profile.boundary = boundary;
        }
        if let Some(path) = &overrides.corpora {
            self.corpora.path = path.clone();
        }
    }

    /// Reject values the profiling pipeline would fail on anyway, with a
    /// message that names the setting.
    pub fn validate(&self) -> Result<()> {
        if self.profile.kgram_length < 1 {
            anyhow::bail!("profile.kgram_length must be at least 1");
        }
        if self.profile.prune && self.profile.top_k < 0 {
            anyhow::bail!(
                "profile.top_k must not be negative (got {})",
                self.profile.top_k
            );
        }
        Ok(())
    }

    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            kgram_length: self.profile.kgram_length,
            top_k: self.profile.prune.then_some(self.profile.top_k),
            boundary: self.profile.boundary,
        }
    }

    /// Corpus directory, resolved against `base` when relative
    pub fn corpora_dir(&self, base: &Path) -> PathBuf {
        if self.corpora.path.is_absolute() {
            self.corpora.path.clone()
        } else {
            base.join(&self.corpora.path)
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist and parse. Without one, `rosetta.toml` in
/// `dir` is used if present, otherwise defaults. A file that exists but
/// fails to parse is always an error.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<RosettaConfig> {
    let candidate = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            let default_path = dir.join(CONFIG_FILENAME);
            if !default_path.exists() {
                debug!("No {} in {}, using defaults", CONFIG_FILENAME, dir.display());
                return Ok(RosettaConfig::default());
            }
            default_path
        }
    };

    let config = load_toml_config(&candidate)?;
    debug!("Loaded config from {}", candidate.display());
    Ok(config)
}

fn load_toml_config(path: &Path) -> Result<RosettaConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: RosettaConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}
