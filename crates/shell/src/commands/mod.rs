//! The commands under the `namesake` CLI.

mod check;
mod eval;

use std::path::PathBuf;

use clap::Subcommand;

use crate::algorithms::Algorithm;

pub use check::check;
pub use eval::eval;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an algorithm on one or two strings and print the result.
    Eval {
        /// The algorithm to run.
        #[arg(short('a'), long)]
        algorithm: Algorithm,

        /// The input strings.
        #[arg(required = true, num_args = 1..=2)]
        inputs: Vec<String>,
    },
    /// Run an algorithm over every row of a CSV fixture and report mismatches.
    Check {
        /// The algorithm to run.
        #[arg(short('a'), long)]
        algorithm: Algorithm,

        /// The header-less CSV file whose rows hold the inputs followed by the expected output.
        #[arg(short('f'), long)]
        fixture: PathBuf,
    },
}
