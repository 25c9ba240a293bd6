//! Top-K pruning
//!
//! Keeps the `k` heaviest entries of a profile with a bounded min-heap:
//! every entry is pushed, and whenever the heap grows past `k` the weakest
//! one is evicted. Ties on weight go to the lexicographically smaller
//! k-gram, so the result never depends on map or heap internals.

use super::{Profile, ProfileError, Result};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by "how strongly it deserves to be kept".
#[derive(Debug)]
struct Candidate<'a> {
    kgram: &'a str,
    weight: f64,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| other.kgram.cmp(self.kgram))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

/// Keep the `keep` highest-weighted entries of `profile`.
///
/// `keep == 0` returns an empty profile and `keep >= profile.len()` returns
/// the profile unchanged. Negative values fail with `InvalidArgument`.
pub fn top_kgrams(profile: &Profile, keep: i64) -> Result<Profile> {
    if keep < 0 {
        return Err(ProfileError::InvalidArgument(format!(
            "cannot keep a negative number of k-grams ({keep})"
        )));
    }
    if keep == 0 {
        return Ok(Profile::new());
    }
    // usize::MAX covers platforms where i64 doesn't fit
    let keep = usize::try_from(keep).unwrap_or(usize::MAX);
    if keep >= profile.len() {
        return Ok(profile.clone());
    }

    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(keep + 1);
    for (kgram, weight) in profile.iter() {
        heap.push(Reverse(Candidate { kgram, weight }));
        if heap.len() > keep {
            heap.pop();
        }
    }

    Ok(heap
        .into_iter()
        .map(|Reverse(c)| (c.kgram, c.weight))
        .collect())
}
