//! New York State Identification and Intelligence System (NYSIIS).

use super::{is_vowel, uppercase};
use crate::Error;

/// The prefix and suffix rules look up to three characters into the name.
const MIN_LEN: usize = 3;

/// The characters emitted for one position of the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    /// A single character.
    One(char),
    /// Two characters.
    Two(char, char),
}

impl Piece {
    /// The last character of the piece.
    const fn last(self) -> char {
        match self {
            Self::One(c) | Self::Two(_, c) => c,
        }
    }

    /// Appends the piece to the key.
    fn push_to(self, key: &mut Vec<char>) {
        match self {
            Self::One(c) => key.push(c),
            Self::Two(c, d) => key.extend([c, d]),
        }
    }
}

/// Rewrites the start of the name in place.
fn rewrite_prefix(name: &mut Vec<char>) {
    let drop_first = match name.as_mut_slice() {
        ['M', second @ 'A', 'C', ..] => {
            *second = 'C';
            false
        }
        ['K', 'N', ..] => true,
        [first @ 'K', ..] => {
            *first = 'C';
            false
        }
        [first @ 'P', second @ ('H' | 'F'), ..] => {
            *first = 'F';
            *second = 'F';
            false
        }
        ['S', second @ 'C', third @ 'H', ..] => {
            *second = 'S';
            *third = 'S';
            false
        }
        _ => false,
    };
    if drop_first {
        name.remove(0);
    }
}

/// Rewrites the last two characters of the name as one.
fn rewrite_suffix(name: &mut Vec<char>) {
    let n = name.len();
    let replacement = match name[n - 2..] {
        ['I' | 'E', 'E'] => 'Y',
        ['D', 'T'] | ['R', 'T'] | ['R', 'D'] | ['N', 'T'] | ['N', 'D'] => 'D',
        _ => return,
    };
    name.truncate(n - 2);
    name.push(replacement);
}

/// Translates the character at `i`, returning the piece to emit and the
/// number of following characters it consumed.
fn translate(name: &[char], i: usize) -> (Piece, usize) {
    let prev = name[i - 1];
    let next = name.get(i + 1).copied();
    let after = name.get(i + 2).copied();

    match (name[i], next, after) {
        ('E', Some('V'), _) => (Piece::Two('A', 'F'), 1),
        (c, ..) if is_vowel(c) => (Piece::One('A'), 0),
        ('Q', ..) => (Piece::One('G'), 0),
        ('Z', ..) => (Piece::One('S'), 0),
        ('M', ..) => (Piece::One('N'), 0),
        ('K', Some('N'), _) => (Piece::One('N'), 0),
        ('K', ..) => (Piece::One('C'), 0),
        ('S', Some('C'), Some('H')) => (Piece::Two('S', 'S'), 2),
        ('P', Some('H'), _) => (Piece::One('F'), 1),
        ('H', ..) if !is_vowel(prev) || next.is_some_and(|c| !is_vowel(c)) => {
            (Piece::One(if is_vowel(prev) { 'A' } else { prev }), 0)
        }
        ('W', ..) if is_vowel(prev) => (Piece::One(prev), 0),
        (c, ..) => (Piece::One(c), 0),
    }
}

/// Computes the NYSIIS code of a name.
///
/// The name is uppercased and its first and last characters are rewritten
/// (`MAC` to `MCC`, `KN` to `N`, `K` to `C`, `PH` and `PF` to `FF`, `SCH` to
/// `SSS`; `IE` and `EE` to `Y`, and `DT`, `RT`, `RD`, `NT`, `ND` to `D`).
/// The first character starts the key. Every later character is translated
/// by the first rule that applies to it, and the translation is appended
/// unless it ends with the same character the key currently ends with.
/// Finally a trailing `S` is dropped, a trailing `AY` becomes `Y`, and a
/// trailing `A` is dropped.
///
/// Characters other than letters are not removed and are copied into the
/// key like any other consonant.
///
/// Encoding a code again does not in general give the same code back:
/// `MATAE`, the code of `Mathews`, encodes to `MAT`, and a code shorter than
/// three characters is rejected.
///
/// # Errors
///
/// * If `name` has fewer than three characters.
///
/// # Examples
///
/// ```
/// use namesake::phonetic::nysiis;
///
/// assert_eq!(nysiis("Macintosh").unwrap(), "MCANT");
/// assert_eq!(nysiis("Knight").unwrap(), "NAGT");
/// assert_eq!(nysiis("Evers").unwrap(), "EVAR");
/// assert!(nysiis("Al").is_err());
/// ```
///
/// # References
///
/// * [NYSIIS](https://en.wikipedia.org/wiki/New_York_State_Identification_and_Intelligence_System)
pub fn nysiis(name: &str) -> Result<String, Error> {
    let mut name = uppercase(name);
    if name.len() < MIN_LEN {
        return Err(Error::TooShort {
            algorithm: "nysiis",
            min: MIN_LEN,
            len: name.len(),
        });
    }

    rewrite_prefix(&mut name);
    rewrite_suffix(&mut name);

    let mut key = Vec::with_capacity(name.len());
    key.push(name[0]);

    let mut i = 1;
    while i < name.len() {
        let (piece, consumed) = translate(&name, i);
        // compare with the last character emitted, not the last one read
        if key.last() != Some(&piece.last()) {
            piece.push_to(&mut key);
        }
        i += 1 + consumed;
    }

    if key.len() > 1 && key.last() == Some(&'S') {
        key.pop();
    }
    if key.ends_with(&['A', 'Y']) {
        key.remove(key.len() - 2);
    }
    if key.len() > 1 && key.last() == Some(&'A') {
        key.pop();
    }

    Ok(key.into_iter().collect())
}
