#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod edits;
pub mod number;
pub mod phonetic;
pub mod similarity;

mod error;

pub use edits::{damerau_levenshtein, hamming, levenshtein};
pub use error::Error;
pub use number::Number;
pub use phonetic::{
    match_rating_codex, match_rating_comparison, match_rating_similarity, metaphone, nysiis, soundex,
};
pub use similarity::{jaro, jaro_winkler, jaro_winkler_long};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
