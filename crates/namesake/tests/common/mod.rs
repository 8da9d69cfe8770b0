//! Helpers shared by the integration tests.

#![allow(dead_code)]

use rand::prelude::*;

/// Reads a header-less fixture from `tests/data`.
///
/// Each row holds the input(s) followed by the expected output.
pub fn read_fixture(name: &str) -> Vec<Vec<String>> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(format!("{name}.csv"));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .unwrap_or_else(|e| panic!("Could not open {path:?}: {e}"));

    reader
        .records()
        .map(|record| {
            record
                .unwrap_or_else(|e| panic!("Bad row in {path:?}: {e}"))
                .iter()
                .map(ToString::to_string)
                .collect()
        })
        .collect()
}

/// Generates `cardinality` random strings with lengths in `[min_len, max_len]`
/// over the characters of `alphabet`.
pub fn random_strings(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len)
                .filter_map(|_| alphabet.choose(&mut rng).copied())
                .collect()
        })
        .collect()
}

/// Upper-case letters, for names.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A small alphabet, so random strings share many characters.
pub const SMALL: &str = "ACGTé";
