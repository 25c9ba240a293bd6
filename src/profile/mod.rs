//! Character k-gram frequency profiles
//!
//! A profile maps every k-gram seen in a text to a weight: a raw count
//! straight out of the counter, or a unit-length score once normalized.
//! The pipeline is strictly left to right:
//!
//! ```text
//! text -> count_kgrams -> normalize -> top_kgrams -> similarity::*
//! ```
//!
//! Every stage borrows its input and returns a fresh [`Profile`].

mod ngram;
mod normalize;
mod top_k;

pub use ngram::{count_kgrams, count_kgrams_with, Boundary};
pub use normalize::normalize;
pub use top_k::top_kgrams;

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by the profiling and ranking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Mapping from k-gram to weight.
///
/// Keys iterate in lexicographic order, which is what makes the
/// tie-breaking in [`top_kgrams`] and the ranking reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Profile {
    weights: BTreeMap<String, f64>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a k-gram, `None` if it never occurred
    pub fn get(&self, kgram: &str) -> Option<f64> {
        self.weights.get(kgram).copied()
    }

    pub fn contains(&self, kgram: &str) -> bool {
        self.weights.contains_key(kgram)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate `(kgram, weight)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, w)| (k.as_str(), *w))
    }

    pub fn kgrams(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Σ weight², the squared L2 magnitude
    pub fn sum_of_squares(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    /// Entries ordered heaviest first, ties broken by key.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Add `amount` to a k-gram's weight. Only the counter builds profiles
    /// incrementally; everything downstream collects into a new profile.
    pub(crate) fn bump(&mut self, kgram: String, amount: f64) {
        *self.weights.entry(kgram).or_insert(0.0) += amount;
    }
}

impl FromIterator<(String, f64)> for Profile {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Profile {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, w)| (k.to_string(), w)).collect()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for Profile {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// How a text is turned into a comparable profile.
///
/// Text profiles and corpus profiles must be built with the same options,
/// otherwise their k-gram spaces don't line up and every similarity
/// degrades towards zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    pub kgram_length: usize,
    /// Entries to keep after normalizing; `None` keeps everything
    pub top_k: Option<i64>,
    pub boundary: Boundary,
}

impl ProfileOptions {
    pub const DEFAULT_KGRAM_LENGTH: usize = 3;
    pub const DEFAULT_TOP_K: i64 = 500;
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            kgram_length: Self::DEFAULT_KGRAM_LENGTH,
            top_k: Some(Self::DEFAULT_TOP_K),
            boundary: Boundary::default(),
        }
    }
}

/// Count, normalize and optionally prune a text in one go.
pub fn profile_text(text: &str, options: &ProfileOptions) -> Result<Profile> {
    let counts = count_kgrams_with(text, options.kgram_length, options.boundary)?;
    let normalized = normalize(&counts)?;
    match options.top_k {
        Some(keep) => top_kgrams(&normalized, keep),
        None => Ok(normalized),
    }
}
