//! Evaluating an algorithm on strings from the command line.

use crate::algorithms::{Algorithm, Outcome};

/// Runs `algorithm` on `inputs`.
pub fn eval(algorithm: Algorithm, inputs: &[String]) -> Result<Outcome, String> {
    ftlog::info!("Running {algorithm:?} on {inputs:?}");
    let outcome = algorithm.evaluate(inputs)?;
    ftlog::debug!("{algorithm:?}{inputs:?} => {outcome:?}");
    Ok(outcome)
}
