//! Approximate equality of cell values.
//!
//! Two values match when their edit distance, as a percentage of the longer
//! normalized key, is within the threshold. The comparison stays in integers:
//! `distance * 100 <= max_len * threshold`.

use colmatch_model::FuzzyThreshold;

use crate::distance::levenshtein;
use crate::normalize::normalize_key;

/// Decides whether two raw cell values are a fuzzy match.
///
/// Identical keys always match, even at threshold 0. An empty key never
/// matches a non-empty one.
pub fn is_fuzzy_match(a: &str, b: &str, threshold: FuzzyThreshold) -> bool {
    keys_fuzzy_match(&normalize_key(a), &normalize_key(b), threshold)
}

/// Same rule as [`is_fuzzy_match`] for keys that are already normalized.
pub fn keys_fuzzy_match(a: &str, b: &str, threshold: FuzzyThreshold) -> bool {
    if a == b {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return true;
    }

    let allowed = max_len * threshold.percent() as usize;
    // The length difference is a lower bound on the distance.
    if len_a.abs_diff(len_b) * 100 > allowed {
        return false;
    }
    levenshtein(a, b) * 100 <= allowed
}
