//! Logger setup
//!
//! The TUI owns the terminal while it runs, so log lines can't go to stderr there:
//! they'd be drawn over the frame. Play mode logs to a file when one is given and
//! is silent otherwise.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    File(PathBuf),
    Off,
}

/// Pick the destination for a run
///
/// An explicit log file always wins. Without one, interactive runs log nowhere.
#[must_use]
pub fn log_destination(interactive: bool, log_file: Option<&Path>) -> LogDestination {
    match log_file {
        Some(path) => LogDestination::File(path.to_path_buf()),
        None if interactive => LogDestination::Off,
        None => LogDestination::Stderr,
    }
}

/// Default level before `RUST_LOG` is applied
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Configure a logger builder for `destination`
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn builder(destination: &LogDestination, verbose: bool) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level(verbose));

    match destination {
        LogDestination::Stderr => {
            builder.parse_default_env();
            builder.target(env_logger::Target::Stderr);
        }
        LogDestination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create log file {}", path.display()))?;
            builder.parse_default_env();
            builder.write_style(env_logger::WriteStyle::Never);
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // RUST_LOG is ignored here: nothing may reach the terminal
        LogDestination::Off => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    Ok(builder)
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already set.
pub fn init(destination: &LogDestination, verbose: bool) -> Result<()> {
    builder(destination, verbose)?
        .try_init()
        .context("Logger already initialized")
}
