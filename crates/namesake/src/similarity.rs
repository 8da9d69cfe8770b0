//! Jaro and Jaro-Winkler similarity scores.
//!
//! Scores lie in `[0, 1]`, where `1` means the strings are identical and `0`
//! means they share no characters. Characters are Unicode scalar values and
//! are compared exactly.

use crate::number::Float;

/// The Jaro score above which the Winkler prefix boost is applied.
pub const WINKLER_THRESHOLD: f64 = 0.7;

/// The weight given to each character of the common prefix.
pub const WINKLER_SCALING: f64 = 0.1;

/// The maximum length of the common prefix that is rewarded.
pub const WINKLER_PREFIX_CAP: usize = 4;

/// The characters shared by two strings, as counted by Jaro.
struct Matches {
    /// The number of matching characters.
    common: usize,
    /// Half the number of matched characters that are out of order.
    transpositions: usize,
}

impl Matches {
    /// Finds the matching characters of `a` and `b`.
    ///
    /// A character of `a` matches the first unused equal character of `b`
    /// that lies within the search window around its own position.
    fn find(a: &[char], b: &[char]) -> Self {
        let window = (a.len().max(b.len()) / 2).saturating_sub(1);

        let mut a_flags = vec![false; a.len()];
        let mut b_flags = vec![false; b.len()];
        let mut common = 0;

        for (i, ca) in a.iter().enumerate() {
            let lo = i.saturating_sub(window);
            let hi = core::cmp::min(i + window, b.len() - 1);
            if let Some(j) = (lo..=hi).find(|&j| !b_flags[j] && b[j] == *ca) {
                a_flags[i] = true;
                b_flags[j] = true;
                common += 1;
            }
        }

        let a_matched = a.iter().zip(&a_flags).filter(|&(_, &f)| f).map(|(c, _)| c);
        let b_matched = b.iter().zip(&b_flags).filter(|&(_, &f)| f).map(|(c, _)| c);
        let out_of_order = a_matched.zip(b_matched).filter(|(x, y)| x != y).count();

        Self {
            common,
            transpositions: out_of_order / 2,
        }
    }

    /// The Jaro score of two strings of the given lengths.
    #[allow(clippy::cast_precision_loss)]
    fn jaro(&self, a_len: usize, b_len: usize) -> f64 {
        if self.common == 0 {
            return 0.0;
        }
        let m = self.common as f64;
        let t = self.transpositions as f64;
        (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
    }
}

/// Computes the Jaro, Jaro-Winkler or long-tolerance Jaro-Winkler score.
#[allow(clippy::cast_precision_loss)]
fn _jaro_winkler(a: &[char], b: &[char], winklerize: bool, long_tolerance: bool) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let matches = Matches::find(a, b);
    let mut score = matches.jaro(a.len(), b.len());

    if !winklerize || score <= WINKLER_THRESHOLD {
        return score;
    }

    let min_len = a.len().min(b.len());
    let prefix = a
        .iter()
        .zip(b)
        .take(min_len.min(WINKLER_PREFIX_CAP))
        .take_while(|(x, y)| x == y)
        .count();
    score += prefix as f64 * WINKLER_SCALING * (1.0 - score);

    let m = matches.common;
    if long_tolerance && min_len > 4 && m > prefix + 1 && 2 * m >= min_len + prefix && !a[0].is_ascii_digit() {
        let agreed = (m - prefix - 1) as f64;
        let remaining = (a.len() + b.len() + 2 - 2 * prefix) as f64;
        score += (1.0 - score) * agreed / remaining;
    }

    score
}

/// Computes the Jaro similarity between two strings.
///
/// Two characters match when they are equal and no further apart than half
/// the length of the longer string, less one. With `m` matches and `t` half
/// the number of matches that appear in a different order in the two
/// strings, the score is `(m / |a| + m / |b| + (m - t) / m) / 3`.
///
/// The score is `0` if either string is empty or nothing matches.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// # Examples
///
/// ```
/// use namesake::similarity::jaro;
///
/// let score: f64 = jaro("MARTHA", "MARHTA");
/// assert!((score - 0.944).abs() < 1e-3);
///
/// let score: f32 = jaro("", "MARTHA");
/// assert_eq!(score, 0.0);
/// ```
///
/// # References
///
/// * [Jaro similarity](https://en.wikipedia.org/wiki/Jaro%E2%80%93Winkler_distance#Jaro_similarity)
#[must_use]
pub fn jaro<F: Float>(a: &str, b: &str) -> F {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    F::from(_jaro_winkler(&a, &b, false, false))
}

/// Computes the Jaro-Winkler similarity between two strings.
///
/// When the Jaro score exceeds [`WINKLER_THRESHOLD`], it is boosted for a
/// common prefix of `p` characters (at most [`WINKLER_PREFIX_CAP`]) as
/// `jaro + p * WINKLER_SCALING * (1 - jaro)`.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// # Examples
///
/// ```
/// use namesake::similarity::jaro_winkler;
///
/// let score: f64 = jaro_winkler("MARTHA", "MARHTA");
/// assert!((score - 0.961).abs() < 1e-3);
///
/// let score: f64 = jaro_winkler("DWAYNE", "DUANE");
/// assert!((score - 0.84).abs() < 1e-3);
/// ```
///
/// # References
///
/// * [Jaro-Winkler similarity](https://en.wikipedia.org/wiki/Jaro%E2%80%93Winkler_distance#Jaro%E2%80%93Winkler_similarity)
#[must_use]
pub fn jaro_winkler<F: Float>(a: &str, b: &str) -> F {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    F::from(_jaro_winkler(&a, &b, true, false))
}

/// Computes the Jaro-Winkler similarity with the long-string adjustment.
///
/// After the prefix boost, strings that are both longer than four
/// characters, share at least two characters beyond the prefix, and agree
/// on more than half of the characters that remain after the prefix receive
/// a further boost of `(1 - score) * (m - p - 1) / (|a| + |b| - 2p + 2)`.
/// The adjustment is skipped when `a` starts with a digit.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// # Examples
///
/// ```
/// use namesake::similarity::{jaro_winkler, jaro_winkler_long};
///
/// let plain: f64 = jaro_winkler("DIXON", "DICKSONX");
/// let long: f64 = jaro_winkler_long("DIXON", "DICKSONX");
/// assert!((plain - 0.813).abs() < 1e-3);
/// assert!((long - 0.830).abs() < 1e-3);
/// ```
#[must_use]
pub fn jaro_winkler_long<F: Float>(a: &str, b: &str) -> F {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    F::from(_jaro_winkler(&a, &b, true, true))
}
