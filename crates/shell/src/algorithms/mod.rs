//! The algorithms exposed by the CLI.

mod outcome;

pub use outcome::Outcome;

/// The available algorithms.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    #[clap(name = "levenshtein")]
    Levenshtein,
    #[clap(name = "damerau-levenshtein")]
    DamerauLevenshtein,
    #[clap(name = "hamming")]
    Hamming,
    #[clap(name = "jaro")]
    Jaro,
    #[clap(name = "jaro-winkler")]
    JaroWinkler,
    #[clap(name = "jaro-winkler-long")]
    JaroWinklerLong,
    #[clap(name = "soundex")]
    Soundex,
    #[clap(name = "nysiis")]
    Nysiis,
    #[clap(name = "metaphone")]
    Metaphone,
    #[clap(name = "match-rating-codex")]
    MatchRatingCodex,
    #[clap(name = "match-rating-comparison")]
    MatchRatingComparison,
}

impl Algorithm {
    /// The number of strings the algorithm takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Soundex | Self::Nysiis | Self::Metaphone | Self::MatchRatingCodex => 1,
            _ => 2,
        }
    }

    /// Runs the algorithm on `inputs`.
    ///
    /// # Errors
    ///
    /// - If the number of inputs does not match the arity of the algorithm.
    /// - If the algorithm rejects its input.
    pub fn evaluate<S: AsRef<str>>(self, inputs: &[S]) -> Result<Outcome, String> {
        if inputs.len() != self.arity() {
            return Err(format!(
                "{self:?} takes {} input(s) but got {}",
                self.arity(),
                inputs.len()
            ));
        }

        let a = inputs[0].as_ref();
        let b = inputs.get(1).map_or("", AsRef::as_ref);

        let outcome = match self {
            Self::Levenshtein => Outcome::Distance(namesake::levenshtein(a, b)),
            Self::DamerauLevenshtein => Outcome::Distance(namesake::damerau_levenshtein(a, b)),
            Self::Hamming => Outcome::Distance(namesake::hamming(a, b)),
            Self::Jaro => Outcome::Score(namesake::jaro(a, b)),
            Self::JaroWinkler => Outcome::Score(namesake::jaro_winkler(a, b)),
            Self::JaroWinklerLong => Outcome::Score(namesake::jaro_winkler_long(a, b)),
            Self::Soundex => Outcome::Code(namesake::soundex(a).map_err(|e| e.to_string())?),
            Self::Nysiis => Outcome::Code(namesake::nysiis(a).map_err(|e| e.to_string())?),
            Self::Metaphone => Outcome::Code(namesake::metaphone(a)),
            Self::MatchRatingCodex => Outcome::Code(namesake::match_rating_codex(a)),
            Self::MatchRatingComparison => Outcome::Verdict(namesake::match_rating_comparison(a, b)),
        };

        Ok(outcome)
    }
}
