//! Lawrence Philips' original Metaphone.

use super::{is_vowel, uppercase};

/// Whether `c` is present and is one of `set`.
fn is_one_of(c: Option<char>, set: &str) -> bool {
    c.is_some_and(|c| set.contains(c))
}

/// Whether `c` is present and is a vowel.
fn is_some_vowel(c: Option<char>) -> bool {
    c.is_some_and(is_vowel)
}

/// Computes the Metaphone code of a word.
///
/// The word is uppercased, and an initial `KN`, `GN`, `PN`, `WR` or `AE`
/// loses its first letter. Doubled letters other than `C` count once.
/// Vowels are only kept at the start of a word. Consonants are mapped by
/// the classic rules, including:
///
/// * `CIA` and `CH` become `X`; `CI`, `CE` and `CY` become `S`; otherwise `K`.
/// * `DGE`, `DGI` and `DGY` become `J`; otherwise `D` becomes `T`.
/// * `GH` before a consonant is silent, as is the `G` of a final `GN`; `G`
///   before `I`, `E` or `Y` becomes `J`; otherwise `K`.
/// * `PH` becomes `F`; `SH`, `SIO` and `SIA` become `X`; `TH` becomes `0`.
/// * `TIO` and `TIA` become `X`, and the `T` of `TCH` is silent.
/// * An initial `X` becomes `S`; elsewhere `X` becomes `KS`.
/// * `W` and `Y` are only kept before a vowel.
/// * A final `B` after `M` is silent.
///
/// Whitespace separates words and appears as a single space in the code.
/// Other characters are ignored.
///
/// Encoding a code again does not in general give the same code back. The
/// `0` of `SM0`, the code of `Smith`, is dropped, and a leading `WT` loses
/// its `W`.
///
/// # Examples
///
/// ```
/// use namesake::phonetic::metaphone;
///
/// assert_eq!(metaphone("Smith"), "SM0");
/// assert_eq!(metaphone("Knight"), "NT");
/// assert_eq!(metaphone("Dumb"), "TM");
/// assert_eq!(metaphone("Xavier"), "SFR");
/// assert_eq!(metaphone(""), "");
/// ```
///
/// # References
///
/// * [Metaphone](https://en.wikipedia.org/wiki/Metaphone)
#[must_use]
pub fn metaphone(word: &str) -> String {
    let mut chars = uppercase(word);
    if matches!(
        chars.as_slice(),
        ['K' | 'G' | 'P', 'N', ..] | ['W', 'R', ..] | ['A', 'E', ..]
    ) {
        chars.remove(0);
    }

    let mut code = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let after = chars.get(i + 2).copied();

        if next == Some(c) && c != 'C' {
            i += 1;
            continue;
        }

        let consumed = match c {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if prev.map_or(true, char::is_whitespace) {
                    code.push(c);
                }
                0
            }
            'B' => {
                if !(prev == Some('M') && next.is_none()) {
                    code.push('B');
                }
                0
            }
            'C' if (next == Some('I') && after == Some('A')) || next == Some('H') => {
                code.push('X');
                1
            }
            'C' if is_one_of(next, "IEY") => {
                code.push('S');
                1
            }
            'C' => {
                code.push('K');
                0
            }
            'D' if next == Some('G') && is_one_of(after, "IEY") => {
                code.push('J');
                2
            }
            'D' => {
                code.push('T');
                0
            }
            'F' | 'J' | 'L' | 'M' | 'N' | 'R' => {
                code.push(c);
                0
            }
            'G' if is_one_of(next, "IEY") => {
                code.push('J');
                0
            }
            'G' if next == Some('H') && after.is_some_and(|a| !is_vowel(a)) => 1,
            'G' if next == Some('N') && after.is_none() => 0,
            'G' => {
                code.push('K');
                0
            }
            'H' => {
                if i == 0 || is_some_vowel(next) || !is_some_vowel(prev) {
                    code.push('H');
                }
                0
            }
            'K' => {
                if prev != Some('C') {
                    code.push('K');
                }
                0
            }
            'P' if next == Some('H') => {
                code.push('F');
                1
            }
            'P' => {
                code.push('P');
                0
            }
            'Q' => {
                code.push('K');
                0
            }
            'S' if next == Some('H') => {
                code.push('X');
                1
            }
            'S' if next == Some('I') && is_one_of(after, "OA") => {
                code.push('X');
                2
            }
            'S' | 'Z' => {
                code.push('S');
                0
            }
            'T' if next == Some('I') && is_one_of(after, "OA") => {
                code.push('X');
                0
            }
            'T' if next == Some('H') => {
                code.push('0');
                1
            }
            'T' if next == Some('C') && after == Some('H') => 0,
            'T' => {
                code.push('T');
                0
            }
            'V' => {
                code.push('F');
                0
            }
            'W' if i == 0 && next == Some('H') => {
                code.push('W');
                1
            }
            'W' | 'Y' => {
                if is_some_vowel(next) {
                    code.push(c);
                }
                0
            }
            'X' if i == 0 && (next == Some('H') || (next == Some('I') && is_one_of(after, "OA"))) => {
                code.push('X');
                0
            }
            'X' if i == 0 => {
                code.push('S');
                0
            }
            'X' => {
                code.push_str("KS");
                0
            }
            c if c.is_whitespace() => {
                if !code.is_empty() && !code.ends_with(' ') {
                    code.push(' ');
                }
                0
            }
            _ => 0,
        };
        i += 1 + consumed;
    }

    code.truncate(code.trim_end().len());
    code
}
