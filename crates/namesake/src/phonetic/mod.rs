//! Phonetic codecs for names.
//!
//! Each codec maps a name to a short code so that names which sound alike
//! map to the same or similar codes. The codecs are defined for English
//! letters; input is uppercased before encoding and other characters are
//! passed through or ignored as each codec describes.
//!
//! The encoders scan the uppercased input with an explicit cursor and
//! append to a separate output buffer. Each one dispatches on the current
//! character through a single ordered `match`, so the first rule that
//! applies wins.

mod match_rating;
mod metaphone;
mod nysiis;
mod soundex;

pub use match_rating::{match_rating_codex, match_rating_comparison, match_rating_similarity};
pub use metaphone::metaphone;
pub use nysiis::nysiis;
pub use soundex::soundex;

/// Whether `c` is one of the vowels `A`, `E`, `I`, `O`, `U`.
const fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Uppercases `s` into a buffer of characters.
fn uppercase(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_uppercase).collect()
}
