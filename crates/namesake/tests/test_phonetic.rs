#![allow(missing_docs)]

mod common;

use test_case::test_case;

use namesake::{
    phonetic::{match_rating_codex, match_rating_comparison, match_rating_similarity, metaphone, nysiis, soundex},
    Error,
};

#[test_case("Robert", "R163"; "robert")]
#[test_case("Rupert", "R163"; "rupert")]
#[test_case("Rubin", "R150"; "rubin")]
#[test_case("Ashcraft", "A261"; "h_is_transparent")]
#[test_case("Tymczak", "T522"; "tymczak")]
#[test_case("Pfister", "P236"; "first_letter_suppresses")]
#[test_case("Honeyman", "H555"; "honeyman")]
#[test_case("Washington", "W252"; "washington")]
#[test_case("Gutierrez", "G362"; "gutierrez")]
#[test_case("Lee", "L000"; "padded")]
#[test_case("O'Brien", "O165"; "punctuation")]
#[test_case("a", "A000"; "single_letter")]
fn soundex_codes(name: &str, expected: &str) {
    assert_eq!(soundex(name).as_deref(), Ok(expected));
}

#[test]
fn soundex_empty() {
    assert_eq!(soundex(""), Err(Error::EmptyInput { algorithm: "soundex" }));
}

#[test]
fn soundex_shape() {
    for name in common::random_strings(256, 1, 12, common::LETTERS, 3) {
        let code = soundex(&name).unwrap();
        let mut chars = code.chars();

        assert_eq!(code.len(), 4, "{name:?} => {code:?}");
        assert_eq!(chars.next(), name.chars().next(), "{name:?} => {code:?}");
        assert!(chars.all(|c| c.is_ascii_digit()), "{name:?} => {code:?}");
    }
}

#[test_case("Macintosh", "MCANT"; "mac_prefix")]
#[test_case("Knight", "NAGT"; "kn_prefix")]
#[test_case("Evers", "EVAR"; "trailing_s")]
#[test_case("Mathews", "MATAE"; "mathews")]
#[test_case("Louis", "L"; "collapses")]
#[test_case("Kevin", "CAFAN"; "kevin")]
#[test_case("Schwartz", "SWART"; "sch_prefix")]
#[test_case("Dewitt", "DAEAT"; "dewitt")]
#[test_case("Bart", "BAD"; "rt_suffix")]
#[test_case("Phillipson", "FALAPSAN"; "ph_prefix")]
#[test_case("Knuth", "NAT"; "knuth")]
#[test_case("Carr", "CAR"; "doubled")]
fn nysiis_codes(name: &str, expected: &str) {
    assert_eq!(nysiis(name).as_deref(), Ok(expected));
}

#[test_case("", 0; "empty")]
#[test_case("Al", 2; "two_letters")]
fn nysiis_too_short(name: &str, len: usize) {
    assert_eq!(
        nysiis(name),
        Err(Error::TooShort {
            algorithm: "nysiis",
            min: 3,
            len
        })
    );
}

#[test_case("Knight"; "knight")]
#[test_case("Evers"; "evers")]
#[test_case("Mackenzie"; "mackenzie")]
#[test_case("Phillipson"; "phillipson")]
#[test_case("Catherine"; "catherine")]
#[test_case("Kevin"; "kevin")]
#[test_case("Johnson"; "johnson")]
#[test_case("Bart"; "bart")]
fn nysiis_reencodes_to_itself(name: &str) {
    let code = nysiis(name).unwrap();
    assert_eq!(nysiis(&code).as_deref(), Ok(code.as_str()));
}

#[test_case("Mathews", Ok("MAT"); "vowel_run_collapses")]
#[test_case("Hayes", Ok("HY"); "ay_suffix")]
#[test_case("Schwartz", Ok("SWAD"); "rt_suffix")]
#[test_case("Macintosh", Ok("MCAD"); "nt_suffix")]
#[test_case("Shaw", Err(1); "code_too_short")]
fn nysiis_reencodes_differently(name: &str, expected: Result<&str, usize>) {
    let code = nysiis(name).unwrap();
    let again = nysiis(&code);
    assert_ne!(again.as_deref(), Ok(code.as_str()));
    match expected {
        Ok(expected) => assert_eq!(again.as_deref(), Ok(expected)),
        Err(len) => assert_eq!(
            again,
            Err(Error::TooShort {
                algorithm: "nysiis",
                min: 3,
                len
            })
        ),
    }
}

#[test_case("Smith", "SM0"; "th")]
#[test_case("Thomas", "0MS"; "initial_th")]
#[test_case("Knight", "NT"; "silent_k_and_gh")]
#[test_case("Wright", "RT"; "wr_prefix")]
#[test_case("Sign", "SN"; "final_gn")]
#[test_case("Philip", "FLP"; "ph")]
#[test_case("Which", "WX"; "wh")]
#[test_case("Catherine", "K0RN"; "catherine")]
#[test_case("Accident", "AKSTNT"; "cc")]
#[test_case("Dumb", "TM"; "mb")]
#[test_case("Xavier", "SFR"; "initial_x")]
#[test_case("John Smith", "JN SM0"; "two_words")]
#[test_case("Smith ", "SM0"; "trailing_space")]
#[test_case("", ""; "empty")]
fn metaphone_codes(word: &str, expected: &str) {
    assert_eq!(metaphone(word), expected);
}

#[test_case("Knight"; "knight")]
#[test_case("Dumb"; "dumb")]
#[test_case("Xavier"; "xavier")]
#[test_case("Accident"; "accident")]
#[test_case("Sign"; "sign")]
#[test_case("Phone"; "phone")]
#[test_case("Jackson"; "jackson")]
#[test_case("Vincent"; "vincent")]
fn metaphone_reencodes_to_itself(word: &str) {
    let code = metaphone(word);
    assert_eq!(metaphone(&code), code);
}

#[test_case("Smith", "SM"; "theta_dropped")]
#[test_case("Thomas", "MS"; "initial_theta")]
#[test_case("Richard", "RKSRT"; "x_expands")]
#[test_case("White", "T"; "leading_w")]
fn metaphone_reencodes_differently(word: &str, expected: &str) {
    let code = metaphone(word);
    assert_ne!(metaphone(&code), code);
    assert_eq!(metaphone(&code), expected);
}

#[test_case("Byrne", "BYRN"; "byrne")]
#[test_case("Boern", "BRN"; "boern")]
#[test_case("Catherine", "CTHRN"; "catherine")]
#[test_case("Christopher", "CHRPHR"; "truncated")]
#[test_case("Aaron", "ARN"; "leading_vowel")]
#[test_case("Lee", "L"; "doubled")]
#[test_case("Al", "AL"; "short")]
#[test_case("", ""; "empty")]
fn codex(name: &str, expected: &str) {
    assert_eq!(match_rating_codex(name), expected);
}

#[test_case("Byrne", "Boern", Some(5), true; "byrne_boern")]
#[test_case("Smith", "Smyth", Some(5), true; "smith_smyth")]
#[test_case("Catherine", "Kathryn", Some(4), true; "catherine_kathryn")]
#[test_case("Aaron", "Erin", Some(5), true; "aaron_erin")]
#[test_case("Michael", "Michelle", Some(6), true; "michael_michelle")]
#[test_case("Bob", "Robert", Some(3), false; "bob_robert")]
#[test_case("Lee", "Leigh", Some(4), false; "lee_leigh")]
#[test_case("Jonathan", "Jon", None, false; "lengths_too_far_apart")]
#[test_case("Tim", "Timothy", None, false; "tim_timothy")]
#[test_case("", "Smith", None, false; "empty")]
fn comparison(a: &str, b: &str, similarity: Option<u8>, matched: bool) {
    assert_eq!(match_rating_similarity(a, b), similarity);
    assert_eq!(match_rating_comparison(a, b), matched);
    assert_eq!(match_rating_comparison(b, a), matched);
}

#[test]
fn comparison_is_reflexive() {
    for name in common::random_strings(128, 1, 12, common::LETTERS, 11) {
        assert!(match_rating_comparison(&name, &name), "{name:?}");
    }
}
