//! Logging for the CLI.

use std::path::Path;

use ftlog::{appender::FileAppender, LevelFilter, LoggerGuard};

/// How much the CLI logs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Level {
    /// The global filter for the logger.
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Configures the logger to write to `log_file`, or to stderr when there is none.
///
/// The returned guard flushes the logger when dropped, so keep it alive for as
/// long as the program runs.
///
/// # Errors
///
/// - If the logger could not be initialized.
pub fn configure(level: Level, log_file: Option<&Path>) -> Result<LoggerGuard, String> {
    let builder = ftlog::Builder::new()
        // global max log level
        .max_log_level(level.filter());

    let builder = match log_file {
        Some(path) => builder.root(FileAppender::new(path)),
        None => builder.root(std::io::stderr()),
    };

    builder.try_init().map_err(|e| e.to_string())
}
