//! Levenshtein edit distance.

use std::mem;

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Characters are Unicode scalar values. Only two rows of the distance matrix
/// are kept, each sized by the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // The distance is symmetric, so the shorter string can drive the row width.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];

    for (i, long_ch) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_ch) in short.iter().enumerate() {
            let cost = usize::from(long_ch != short_ch);
            let insertion = current[j] + 1;
            let deletion = previous[j + 1] + 1;
            let substitution = previous[j] + cost;
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_is_zero() {
        assert_eq!(levenshtein("kitten", "kitten"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn empty_side_is_other_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("jon smith", "john smith"), 1);
        assert_eq!(levenshtein("ab", "xy"), 2);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本", "日本語"), 1);
    }

    #[test]
    fn argument_order_does_not_matter() {
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("sunday", "saturday"), 3);
    }
}
