//! CLI for namesake, the fuzzy name-matching toolkit.

mod algorithms;
mod commands;
mod logger;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The most verbose level of log messages to write.
    #[arg(short('l'), long, value_enum, default_value = "warn")]
    log_level: logger::Level,

    /// Write log messages to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let _guard = logger::configure(args.log_level, args.log_file.as_deref())?;
    ftlog::debug!("{args:?}");

    match args.command {
        Commands::Eval { algorithm, inputs } => {
            let outcome = commands::eval(algorithm, &inputs)?;
            println!("{outcome}");
        }
        Commands::Check { algorithm, fixture } => {
            let report = commands::check(algorithm, &fixture)?;
            println!("{report}");
            if !report.passed() {
                return Err(format!("{} of {} rows failed", report.failed(), report.rows));
            }
        }
    }

    Ok(())
}
