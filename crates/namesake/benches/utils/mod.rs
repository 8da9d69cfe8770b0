//! Input generation shared by the benchmarks.

#![allow(dead_code)]

use rand::prelude::*;

/// Generates `cardinality` random strings of exactly `len` characters drawn from `alphabet`.
pub fn random_strings(cardinality: usize, len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| (0..len).filter_map(|_| alphabet.choose(&mut rng).copied()).collect())
        .collect()
}

/// Surnames with a mix of the prefixes, suffixes and digraphs the codecs rewrite.
pub const NAMES: [&str; 16] = [
    "Ashcraft",
    "Byrne",
    "Catherine",
    "Christopher",
    "Dewitt",
    "Gutierrez",
    "Honeyman",
    "Knight",
    "Macintosh",
    "Mathews",
    "Phillipson",
    "Pfister",
    "Schwartz",
    "Thompson",
    "Tymczak",
    "Washington",
];
