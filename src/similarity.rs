//! Cosine similarity and language ranking
//!
//! Profiles are treated as sparse vectors over the k-gram space. Both sides
//! are expected to be unit length already (see [`crate::profile::normalize`]),
//! so the dot product alone is the cosine similarity.

use crate::corpus::CorpusSet;
use crate::profile::{Profile, ProfileError, Result};
use serde::Serialize;

/// Dot product of two profiles over their shared k-grams.
///
/// K-grams missing from either side (or weighted zero in `rhs`) contribute
/// nothing. No magnitude division happens here.
pub fn cosine_similarity(lhs: &Profile, rhs: &Profile) -> f64 {
    lhs.iter()
        .filter_map(|(kgram, weight)| {
            rhs.get(kgram)
                .filter(|other| *other != 0.0)
                .map(|other| weight * other)
        })
        // f64's Sum starts from -0.0; disjoint profiles must score +0.0
        .fold(0.0, |acc, product| acc + product)
}

/// Label of the corpus most similar to `text_profile`.
///
/// Corpora are visited in label order and only a strictly greater score
/// replaces the current best, so on a tie the alphabetically first label
/// wins. Fails with `EmptyInput` when there are no corpora, or when none of
/// them shares a single k-gram with the text.
pub fn guess_language(text_profile: &Profile, corpora: &CorpusSet) -> Result<String> {
    if corpora.is_empty() {
        return Err(ProfileError::EmptyInput(
            "no corpora to compare against".to_string(),
        ));
    }

    let mut best_score = 0.0;
    let mut best: Option<&str> = None;
    for corpus in corpora {
        let score = cosine_similarity(text_profile, &corpus.profile);
        if score > best_score {
            best_score = score;
            best = Some(corpus.name.as_str());
        }
    }

    best.map(str::to_string).ok_or_else(|| {
        ProfileError::EmptyInput("text shares no k-grams with any corpus".to_string())
    })
}

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub language: String,
    pub score: f64,
}

/// Score every corpus, best first. Equal scores are ordered by label.
pub fn rank_languages(text_profile: &Profile, corpora: &CorpusSet) -> Vec<Match> {
    let mut matches: Vec<Match> = corpora
        .iter()
        .map(|corpus| Match {
            language: corpus.name.clone(),
            score: cosine_similarity(text_profile, &corpus.profile),
        })
        .collect();

    // stable sort keeps label order among equal scores
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
