//! The result of running an algorithm.

use std::fmt;

/// How far apart two scores may be and still agree.
pub const SCORE_TOLERANCE: f64 = 1e-3;

/// What an algorithm produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An edit distance.
    Distance(usize),
    /// A similarity score in `[0, 1]`.
    Score(f64),
    /// A phonetic code.
    Code(String),
    /// Whether two names match.
    Verdict(bool),
}

impl Outcome {
    /// Whether the outcome agrees with `expected`, written the way it appears in a fixture.
    ///
    /// # Errors
    ///
    /// - If `expected` cannot be parsed as the kind of value this outcome holds.
    pub fn matches(&self, expected: &str) -> Result<bool, String> {
        let expected = expected.trim();
        match self {
            Self::Distance(d) => expected
                .parse::<usize>()
                .map(|e| e == *d)
                .map_err(|e| format!("Expected a distance but got {expected:?}: {e}")),
            Self::Score(s) => expected
                .parse::<f64>()
                .map(|e| (e - s).abs() <= SCORE_TOLERANCE)
                .map_err(|e| format!("Expected a score but got {expected:?}: {e}")),
            Self::Code(c) => Ok(c == expected),
            Self::Verdict(v) => match expected {
                "True" => Ok(*v),
                "False" => Ok(!v),
                _ => Err(format!("Expected True or False but got {expected:?}")),
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(d) => write!(f, "{d}"),
            Self::Score(s) => write!(f, "{s:.3}"),
            Self::Code(c) => write!(f, "{c}"),
            Self::Verdict(true) => write!(f, "True"),
            Self::Verdict(false) => write!(f, "False"),
        }
    }
}
