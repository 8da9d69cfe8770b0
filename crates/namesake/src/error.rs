//! Errors for inputs outside an algorithm's domain.

/// An input violated a precondition of a phonetic codec.
///
/// Only `soundex` and `nysiis` index into their input before inspecting it,
/// so they are the only functions in this crate that can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input was empty.
    #[error("{algorithm} requires a non-empty input")]
    EmptyInput {
        /// The name of the algorithm that rejected the input.
        algorithm: &'static str,
    },
    /// The input had fewer characters than the algorithm needs.
    #[error("{algorithm} requires at least {min} characters but got {len}")]
    TooShort {
        /// The name of the algorithm that rejected the input.
        algorithm: &'static str,
        /// The minimum number of characters.
        min: usize,
        /// The number of characters in the input.
        len: usize,
    },
}
