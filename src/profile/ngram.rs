//! K-gram counting
//!
//! Slides a window of `length` characters over the text and counts every
//! substring it sees. Characters are Unicode scalar values, so a trigram of
//! Cyrillic or Devanagari text is three letters, not three bytes.

use super::{Profile, ProfileError, Result};
use serde::Deserialize;

/// Where the scan stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// Stop at the last offset where a full k-gram fits
    #[default]
    Complete,
    /// Start a k-gram at every offset; the last `length - 1` come out
    /// truncated and are counted as their own (shorter) k-grams
    TrailingFragments,
}

impl Boundary {
    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Complete => "complete",
            Boundary::TrailingFragments => "trailing-fragments",
        }
    }
}

/// Count every complete k-gram of `length` characters in `text`.
pub fn count_kgrams(text: &str, length: usize) -> Result<Profile> {
    count_kgrams_with(text, length, Boundary::Complete)
}

/// Count k-grams with an explicit [`Boundary`] policy.
///
/// Fails with `InvalidArgument` when `length` is zero. A text shorter than
/// `length` yields an empty profile under either policy.
pub fn count_kgrams_with(text: &str, length: usize, boundary: Boundary) -> Result<Profile> {
    if length < 1 {
        return Err(ProfileError::InvalidArgument(
            "k-gram length must be at least one".to_string(),
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut counts = Profile::new();
    if length > chars.len() {
        return Ok(counts);
    }

    match boundary {
        Boundary::Complete => {
            for window in chars.windows(length) {
                counts.bump(window.iter().collect(), 1.0);
            }
        }
        Boundary::TrailingFragments => {
            for start in 0..chars.len() {
                let end = (start + length).min(chars.len());
                counts.bump(chars[start..end].iter().collect(), 1.0);
            }
        }
    }

    Ok(counts)
}
