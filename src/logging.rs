//! Logging setup
//!
//! `log` macros throughout the crate, `env_logger` as the backend. `RUST_LOG`
//! overrides the level picked from `-v` flags.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Map the number of `-v` flags to a level filter
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Logs go to `log_file` when given, otherwise to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init().context("Failed to install logger")?;
    Ok(())
}

/// Turn logging off for the rest of the run unless `RUST_LOG` is set
///
/// Called once the TUI is about to own the terminal, after startup warnings
/// have already reached stderr.
pub fn silence_unless_requested() {
    if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        log::set_max_level(LevelFilter::Off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(200), LevelFilter::Trace);
    }

    #[test]
    fn silence_respects_rust_log() {
        log::set_max_level(LevelFilter::Warn);
        silence_unless_requested();

        let expected = if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some() {
            LevelFilter::Warn
        } else {
            LevelFilter::Off
        };
        assert_eq!(log::max_level(), expected);
    }
}
