//! American Soundex.

use crate::Error;

/// The Soundex digit for an uppercase letter, if it has one.
const fn digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// The number of digits following the first letter.
const NUM_DIGITS: usize = 3;

/// Computes the Soundex code of a name.
///
/// The code is the first letter of the name followed by three digits. Each
/// later consonant contributes the digit of its group unless it repeats the
/// digit of the previous coded letter, the first letter included. Vowels,
/// `Y`, and any other uncoded character break a run of repeated digits,
/// while `H` and `W` are transparent. Short codes are padded with `0`.
///
/// # Errors
///
/// * If `name` is empty.
///
/// # Examples
///
/// ```
/// use namesake::phonetic::soundex;
///
/// assert_eq!(soundex("Robert").unwrap(), "R163");
/// assert_eq!(soundex("Pfister").unwrap(), "P236");
/// assert_eq!(soundex("Ashcraft").unwrap(), "A261");
/// assert_eq!(soundex("Lee").unwrap(), "L000");
/// assert!(soundex("").is_err());
/// ```
///
/// # References
///
/// * [Soundex](https://en.wikipedia.org/wiki/Soundex)
pub fn soundex(name: &str) -> Result<String, Error> {
    let mut letters = name.chars().flat_map(char::to_uppercase);
    let first = letters.next().ok_or(Error::EmptyInput { algorithm: "soundex" })?;

    let mut code = String::with_capacity(1 + NUM_DIGITS);
    code.push(first);

    let mut digits = 0;
    let mut last = digit(first);
    for c in letters {
        if digits == NUM_DIGITS {
            break;
        }
        match digit(c) {
            Some(d) => {
                if last != Some(d) {
                    code.push(d);
                    digits += 1;
                }
                last = Some(d);
            }
            None if matches!(c, 'H' | 'W') => (),
            None => last = None,
        }
    }

    for _ in digits..NUM_DIGITS {
        code.push('0');
    }
    Ok(code)
}
