//! Edit distances between strings.
//!
//! All distances count Unicode scalar values, not bytes, and compare them
//! exactly (no case folding or normalization).

use crate::number::UInt;

/// Computes the Levenshtein distance between two strings.
///
/// The Levenshtein distance is defined as the minimum number of edits
/// needed to transform one string into the other, with the allowable
/// edit operations being insertion, deletion, or substitution of a
/// single character.
///
/// We use the Wagner-Fischer algorithm, keeping a single row of the
/// dynamic programming table. Every edit operation has a penalty of `1`.
///
/// The input strings are not required to be of the same length.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// The distance is computed as a `usize` and then cast to `U`, which wraps if
/// `U` cannot hold it. Choose a `U` that can hold `max(len(a), len(b))`
/// characters, such as `u8` only for strings of at most 255 characters.
///
/// # Examples
///
/// ```
/// use namesake::edits::levenshtein;
///
/// let distance: u16 = levenshtein("kitten", "sitting");
/// assert_eq!(distance, 3);
///
/// let distance: u8 = levenshtein("", "naïve");
/// assert_eq!(distance, 5);
/// ```
///
/// # References
///
/// * [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance)
#[must_use]
pub fn levenshtein<U: UInt>(a: &str, b: &str) -> U {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    U::from(if a.is_empty() {
        b.len()
    } else if b.is_empty() {
        a.len()
    } else if a.len() < b.len() {
        // the row is sized by the shorter string
        _levenshtein(&b, &a)
    } else {
        _levenshtein(&a, &b)
    })
}

/// Helper for Levenshtein distance.
fn _levenshtein(a: &[char], b: &[char]) -> usize {
    // initialize DP table for string b
    let mut cur: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.iter().enumerate() {
        // get first column for this row
        let mut pre = cur[0];
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let tmp = cur[j + 1];
            cur[j + 1] = core::cmp::min(
                // deletion
                tmp + 1,
                core::cmp::min(
                    // insertion
                    cur[j] + 1,
                    // match or substitution
                    pre + usize::from(ca != cb),
                ),
            );
            pre = tmp;
        }
    }
    cur[b.len()]
}

/// Computes the Damerau-Levenshtein distance between two strings.
///
/// This is the restricted variant, also known as the optimal string
/// alignment distance: in addition to insertions, deletions and
/// substitutions, a transposition of two adjacent characters counts as a
/// single edit. A substring may not be edited more than once, so this is not
/// a true metric. For example, `"CA"` to `"ABC"` costs `3` here, whereas the
/// unrestricted distance is `2`.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// The distance is computed as a `usize` and then cast to `U`, which wraps if
/// `U` cannot hold it. Choose a `U` that can hold `max(len(a), len(b))`
/// characters, such as `u8` only for strings of at most 255 characters.
///
/// # Examples
///
/// ```
/// use namesake::edits::damerau_levenshtein;
///
/// let distance: u32 = damerau_levenshtein("abcd", "acbd");
/// assert_eq!(distance, 1);
///
/// let distance: u32 = damerau_levenshtein("CA", "ABC");
/// assert_eq!(distance, 3);
/// ```
///
/// # References
///
/// * [Optimal string alignment distance](https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Optimal_string_alignment_distance)
#[must_use]
pub fn damerau_levenshtein<U: UInt>(a: &str, b: &str) -> U {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    U::from(if a.is_empty() {
        b.len()
    } else if b.is_empty() {
        a.len()
    } else {
        _damerau_levenshtein(&a, &b)
    })
}

/// Helper for Damerau-Levenshtein distance.
fn _damerau_levenshtein(a: &[char], b: &[char]) -> usize {
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut cell = core::cmp::min(
                // deletion
                table[i - 1][j] + 1,
                core::cmp::min(
                    // insertion
                    table[i][j - 1] + 1,
                    // match or substitution
                    table[i - 1][j - 1] + cost,
                ),
            );
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                // transposition
                cell = core::cmp::min(cell, table[i - 2][j - 2] + 1);
            }
            table[i][j] = cell;
        }
    }

    table[a.len()][b.len()]
}

/// Computes the Hamming distance between two strings.
///
/// The Hamming distance is defined as the number of positions at which
/// the corresponding symbols are different.
///
/// The input strings are not required to be of the same length. Every
/// character in the longer string that has no counterpart in the shorter
/// string counts as a mismatch, so the distance from the empty string is the
/// length of the other string.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// The distance is computed as a `usize` and then cast to `U`, which wraps if
/// `U` cannot hold it. Choose a `U` that can hold `max(len(a), len(b))`
/// characters, such as `u8` only for strings of at most 255 characters.
///
/// # Examples
///
/// ```
/// use namesake::edits::hamming;
///
/// let distance: u16 = hamming("karolin", "kathrin");
/// assert_eq!(distance, 3);
///
/// let distance: u16 = hamming("abc", "abcd");
/// assert_eq!(distance, 1);
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
#[must_use]
pub fn hamming<U: UInt>(a: &str, b: &str) -> U {
    let (mut a, mut b) = (a.chars(), b.chars());
    let mut distance = 0;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => distance += usize::from(x != y),
            (Some(_), None) | (None, Some(_)) => distance += 1,
            (None, None) => break,
        }
    }
    U::from(distance)
}
