//! Distance metrics between words
//!
//! Pure functions used by the heuristic estimator and difficulty scoring:
//! Hamming distance, Levenshtein edit distance, and letter-frequency
//! difference.

use super::Word;

/// Count positions where two equal-length words differ
///
/// Defined only for equal-length words; the mismatch case is a caller bug
/// caught in debug builds.
///
/// # Examples
/// ```
/// use ladder_engine::core::{Word, distance::hamming};
///
/// let cat = Word::new("cat").unwrap();
/// let cot = Word::new("cot").unwrap();
/// assert_eq!(hamming(&cat, &cot), 1);
/// ```
#[must_use]
pub fn hamming(a: &Word, b: &Word) -> usize {
    debug_assert_eq!(a.len(), b.len(), "hamming requires equal-length words");
    a.bytes()
        .iter()
        .zip(b.bytes())
        .filter(|(x, y)| x != y)
        .count()
}

/// Classic dynamic-programming edit distance
///
/// Insertion, deletion, and substitution all cost 1. Computes the full
/// matrix (row-rolling, no banding).
///
/// # Examples
/// ```
/// use ladder_engine::core::{Word, distance::levenshtein};
///
/// let cat = Word::new("cat").unwrap();
/// let dog = Word::new("dog").unwrap();
/// assert_eq!(levenshtein(&cat, &dog), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &Word, b: &Word) -> usize {
    let a = a.bytes();
    let b = b.bytes();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Sum of absolute letter-count differences
///
/// For every letter appearing in either word, accumulates
/// `|count_in_a - count_in_b|`.
///
/// # Examples
/// ```
/// use ladder_engine::core::{Word, distance::char_freq_diff};
///
/// let cat = Word::new("cat").unwrap();
/// let cot = Word::new("cot").unwrap();
/// // 'a' appears only in cat, 'o' only in cot
/// assert_eq!(char_freq_diff(&cat, &cot), 2);
/// ```
#[must_use]
pub fn char_freq_diff(a: &Word, b: &Word) -> usize {
    let mut counts_a = [0i32; 26];
    let mut counts_b = [0i32; 26];

    for &byte in a.bytes() {
        counts_a[usize::from(byte - b'a')] += 1;
    }
    for &byte in b.bytes() {
        counts_b[usize::from(byte - b'a')] += 1;
    }

    counts_a
        .iter()
        .zip(&counts_b)
        .map(|(x, y)| (x - y).unsigned_abs() as usize)
        .sum()
}
