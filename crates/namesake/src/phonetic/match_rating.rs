//! Western Airlines' Match Rating Approach.

use super::{is_vowel, uppercase};

/// The maximum length of a codex.
const MAX_CODEX_LEN: usize = 6;

/// Codices whose lengths differ by this much or more are not compared.
const MAX_LEN_DIFFERENCE: usize = 3;

/// Computes the codex of a name as a buffer of characters.
fn codex(name: &str) -> Vec<char> {
    let letters = uppercase(name)
        .into_iter()
        .filter(|c| !c.is_whitespace())
        .collect::<Vec<_>>();

    let mut codex = letters
        .iter()
        .enumerate()
        .filter(|&(i, &c)| i == 0 || (!is_vowel(c) && letters[i - 1] != c))
        .map(|(_, &c)| c)
        .collect::<Vec<_>>();

    let n = codex.len();
    if n > MAX_CODEX_LEN {
        codex.drain(3..n - 3);
    }
    codex
}

/// The lowest rating at which two codices match, given their total length.
const fn minimum_rating(total_len: usize) -> u8 {
    match total_len {
        0..=4 => 5,
        5..=7 => 4,
        8..=11 => 3,
        _ => 2,
    }
}

/// Drops the characters that agree position by position, keeping the rest
/// of each sequence in order.
fn unmatched<I, J>(a: I, b: J) -> (Vec<char>, Vec<char>)
where
    I: Iterator<Item = char>,
    J: Iterator<Item = char>,
{
    let (mut a, mut b) = (a.fuse(), b.fuse());
    let (mut a_rest, mut b_rest) = (Vec::new(), Vec::new());
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) if x == y => (),
            (x, y) => {
                a_rest.extend(x);
                b_rest.extend(y);
            }
        }
    }
    (a_rest, b_rest)
}

/// The similarity rating of two codices.
fn rating(a: &[char], b: &[char]) -> Option<u8> {
    if a.is_empty() || b.is_empty() || a.len().abs_diff(b.len()) >= MAX_LEN_DIFFERENCE {
        return None;
    }

    // left to right, then what is left from right to left
    let (a, b) = unmatched(a.iter().copied(), b.iter().copied());
    let (a, b) = unmatched(a.into_iter().rev(), b.into_iter().rev());

    #[allow(clippy::cast_possible_truncation)]
    let unmatched = a.len().max(b.len()) as u8;
    Some(6_u8.saturating_sub(unmatched))
}

/// Computes the Match Rating Approach codex of a name.
///
/// The name is uppercased and whitespace is removed. The first letter is
/// kept; after it, vowels are dropped, as is any letter equal to the letter
/// before it. A codex longer than six characters keeps only its first three
/// and last three characters.
///
/// # Examples
///
/// ```
/// use namesake::phonetic::match_rating_codex;
///
/// assert_eq!(match_rating_codex("Byrne"), "BYRN");
/// assert_eq!(match_rating_codex("Boern"), "BRN");
/// assert_eq!(match_rating_codex("Catherine"), "CTHRN");
/// assert_eq!(match_rating_codex("Christopher"), "CHRPHR");
/// ```
///
/// # References
///
/// * [Match rating approach](https://en.wikipedia.org/wiki/Match_rating_approach)
#[must_use]
pub fn match_rating_codex(name: &str) -> String {
    codex(name).into_iter().collect()
}

/// Computes the Match Rating Approach similarity rating of two names.
///
/// Characters that agree position by position are removed from both codices
/// reading left to right, and the remainders are compared again reading
/// right to left. The rating is six less the larger number of characters
/// left unmatched on either side.
///
/// Returns `None` when the names cannot be compared: either codex is empty,
/// or their lengths differ by three or more.
///
/// # Examples
///
/// ```
/// use namesake::phonetic::match_rating_similarity;
///
/// assert_eq!(match_rating_similarity("Byrne", "Boern"), Some(5));
/// assert_eq!(match_rating_similarity("Tim", "Timothy"), None);
/// ```
#[must_use]
pub fn match_rating_similarity(a: &str, b: &str) -> Option<u8> {
    rating(&codex(a), &codex(b))
}

/// Decides whether two names match under the Match Rating Approach.
///
/// The names match when their [`match_rating_similarity`] is at least the
/// minimum rating for the total length of their codices: `5` up to a total
/// of four characters, `4` up to seven, `3` up to eleven, and `2` beyond.
/// Names that cannot be compared do not match.
///
/// # Examples
///
/// ```
/// use namesake::phonetic::match_rating_comparison;
///
/// assert!(match_rating_comparison("Byrne", "Boern"));
/// assert!(match_rating_comparison("Smith", "Smyth"));
/// assert!(!match_rating_comparison("Bob", "Robert"));
/// assert!(!match_rating_comparison("", "Smith"));
/// ```
#[must_use]
pub fn match_rating_comparison(a: &str, b: &str) -> bool {
    let (a, b) = (codex(a), codex(b));
    rating(&a, &b).is_some_and(|r| r >= minimum_rating(a.len() + b.len()))
}
