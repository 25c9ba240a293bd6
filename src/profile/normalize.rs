//! L2 normalization

use super::{Profile, ProfileError, Result};

/// Rescale a profile to unit length so that a dot product between two
/// profiles is their cosine similarity, independent of text length.
///
/// Fails with `EmptyInput` when Σ weight² is zero.
pub fn normalize(profile: &Profile) -> Result<Profile> {
    let total = profile.sum_of_squares();
    if total == 0.0 {
        return Err(ProfileError::EmptyInput(
            "cannot normalize a profile with no k-grams".to_string(),
        ));
    }

    let magnitude = total.sqrt();
    Ok(profile
        .iter()
        .map(|(kgram, weight)| (kgram, weight / magnitude))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::count_kgrams;

    #[test]
    fn test_single_kgram_becomes_one() {
        let normalized = normalize(&count_kgrams("aaa", 1).unwrap()).unwrap();
        assert_eq!(normalized, Profile::from([("a", 1.0)]));
    }

    #[test]
    fn test_two_equal_kgrams() {
        let normalized = normalize(&Profile::from([("a", 1.0), ("b", 1.0)])).unwrap();
        let expected = 1.0 / 2f64.sqrt();
        assert!((normalized.get("a").unwrap() - expected).abs() < 1e-12);
        assert!((normalized.get("b").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unit_length() {
        let samples = [
            "the quick brown fox jumps over the lazy dog",
            "le renard brun rapide saute par-dessus le chien paresseux",
            "zzzzzzzz",
            "ab",
        ];
        for text in samples {
            let normalized = normalize(&count_kgrams(text, 2).unwrap()).unwrap();
            assert!(
                (normalized.sum_of_squares() - 1.0).abs() < 1e-9,
                "{text:?} normalized to {}",
                normalized.sum_of_squares()
            );
        }
    }

    #[test]
    fn test_input_untouched() {
        let counts = Profile::from([("a", 3.0), ("b", 4.0)]);
        let normalized = normalize(&counts).unwrap();
        assert_eq!(counts.get("a"), Some(3.0));
        assert!((normalized.get("a").unwrap() - 0.6).abs() < 1e-12);
        assert!((normalized.get("b").unwrap() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_empty_profile_fails() {
        let err = normalize(&Profile::new()).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyInput(_)));
    }

    #[test]
    fn test_all_zero_weights_fail() {
        let err = normalize(&Profile::from([("a", 0.0)])).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyInput(_)));
    }
}
