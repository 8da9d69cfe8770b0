//! Runs every algorithm against its fixture in `tests/data`.

mod common;

use namesake::{
    damerau_levenshtein, hamming, jaro, jaro_winkler, jaro_winkler_long, levenshtein, match_rating_codex,
    match_rating_comparison, metaphone, nysiis, soundex,
};

/// Checks a two-input distance against its fixture.
fn check_distance(name: &str, distance: fn(&str, &str) -> usize) {
    for row in common::read_fixture(name) {
        let expected = row[2].parse::<usize>().unwrap();
        let actual = distance(&row[0], &row[1]);
        assert_eq!(actual, expected, "{name}({:?}, {:?})", row[0], row[1]);
    }
}

/// Checks a two-input score against its fixture, to three decimal places.
fn check_score(name: &str, score: fn(&str, &str) -> f64) {
    for row in common::read_fixture(name) {
        let expected = row[2].parse::<f64>().unwrap();
        let actual = score(&row[0], &row[1]);
        assert!(
            (actual - expected).abs() <= 1e-3,
            "{name}({:?}, {:?}) => {actual:.3}, expected {expected:.3}",
            row[0],
            row[1]
        );
    }
}

/// Checks a codec against its fixture.
fn check_codec(name: &str, codec: impl Fn(&str) -> String) {
    for row in common::read_fixture(name) {
        assert_eq!(codec(&row[0]), row[1], "{name}({:?})", row[0]);
    }
}

#[test]
fn levenshtein_fixture() {
    check_distance("levenshtein", levenshtein::<usize>);
}

#[test]
fn damerau_levenshtein_fixture() {
    check_distance("damerau_levenshtein", damerau_levenshtein::<usize>);
}

#[test]
fn hamming_fixture() {
    check_distance("hamming", hamming::<usize>);
}

#[test]
fn jaro_fixture() {
    check_score("jaro_distance", jaro::<f64>);
}

#[test]
fn jaro_winkler_fixture() {
    check_score("jaro_winkler", jaro_winkler::<f64>);
}

#[test]
fn jaro_winkler_long_fixture() {
    check_score("jaro_winkler_long", jaro_winkler_long::<f64>);
}

#[test]
fn soundex_fixture() {
    check_codec("soundex", |s| soundex(s).unwrap());
}

#[test]
fn nysiis_fixture() {
    check_codec("nysiis", |s| nysiis(s).unwrap());
}

#[test]
fn metaphone_fixture() {
    check_codec("metaphone", metaphone);
}

#[test]
fn match_rating_codex_fixture() {
    check_codec("match_rating_codex", match_rating_codex);
}

#[test]
fn match_rating_comparison_fixture() {
    for row in common::read_fixture("match_rating_comparison") {
        let expected = row[2] == "True";
        let actual = match_rating_comparison(&row[0], &row[1]);
        assert_eq!(actual, expected, "match_rating_comparison({:?}, {:?})", row[0], row[1]);
    }
}
