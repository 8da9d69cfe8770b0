//! Running an algorithm against a CSV fixture.

use std::{fmt, path::Path};

use crate::algorithms::Algorithm;

/// A row of a fixture on which the algorithm disagreed with the expected output.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The 1-based row number in the fixture.
    pub row: usize,
    /// The inputs on that row.
    pub inputs: Vec<String>,
    /// The expected output written on that row.
    pub expected: String,
    /// What the algorithm produced, or why it could not.
    pub actual: String,
}

/// The outcome of checking a fixture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// The number of rows checked.
    pub rows: usize,
    /// The rows that failed.
    pub failures: Vec<Failure>,
}

impl Report {
    /// Whether every row passed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// The number of rows that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for Failure {
            row,
            inputs,
            expected,
            actual,
        } in &self.failures
        {
            writeln!(f, "row {row}: {inputs:?} => {actual}, expected {expected}")?;
        }
        write!(f, "{} of {} rows passed", self.rows - self.failed(), self.rows)
    }
}

/// Runs `algorithm` over every row of the fixture at `path`.
///
/// Each row holds the inputs followed by the expected output. Rows whose
/// expected output cannot be parsed, or on which the algorithm returns an
/// error, count as failures.
///
/// # Errors
///
/// - If the fixture cannot be read.
/// - If a row has the wrong number of fields for the algorithm.
pub fn check<P: AsRef<Path>>(algorithm: Algorithm, path: P) -> Result<Report, String> {
    let path = path.as_ref();
    ftlog::info!("Checking {algorithm:?} against {path:?}");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| e.to_string())?;

    let mut report = Report::default();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let mut fields = record.map_err(|e| e.to_string())?.iter().map(ToString::to_string).collect::<Vec<_>>();

        let expected = match fields.pop() {
            Some(expected) if fields.len() == algorithm.arity() => expected,
            _ => {
                return Err(format!(
                    "Row {row} of {path:?} should have {} fields",
                    algorithm.arity() + 1
                ))
            }
        };

        let actual = algorithm
            .evaluate(&fields)
            .and_then(|outcome| outcome.matches(&expected).map(|ok| (outcome, ok)));
        report.rows += 1;

        let actual = match actual {
            Ok((outcome, true)) => {
                ftlog::trace!("Row {row} passed: {fields:?} => {outcome}");
                continue;
            }
            Ok((outcome, false)) => outcome.to_string(),
            Err(e) => e,
        };
        ftlog::warn!("Row {row} failed: {fields:?} => {actual}, expected {expected}");

        report.failures.push(Failure {
            row,
            inputs: fields,
            expected,
            actual,
        });
    }

    ftlog::info!("{} of {} rows passed", report.rows - report.failed(), report.rows);
    Ok(report)
}
