//! Logging for the stylecfg CLI
//!
//! Diagnostics go through `tracing` to stderr. `step` and `success` are
//! user-facing progress lines and are printed regardless of the filter
//! unless the logger was initialised quiet.

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Filter directives read from the environment, e.g. `STYLECFG_LOG=debug`.
pub const LOG_ENV: &str = "STYLECFG_LOG";

static QUIET: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    /// 0 = warn, 1 = info, 2+ = debug
    pub verbosity: u8,
    pub quiet: bool,
    pub json: bool,
    /// Colour the level markers; off when stderr is not a terminal.
    pub ansi: bool,
}

impl LogOptions {
    pub fn level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(options: LogOptions) {
    QUIET.store(options.quiet, Ordering::Relaxed);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(options.level()));

    let result = if options.json {
        tracing_subscriber::fmt()
            .json()
            .with_ansi(options.ansi)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_ansi(options.ansi)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("logger already initialised");
    }
}

pub fn debug(msg: &str) {
    tracing::debug!("{}", msg);
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn warn(msg: &str) {
    tracing::warn!("{}", msg);
}

pub fn step(msg: &str) {
    tracing::info!("{}", msg);
    if !QUIET.load(Ordering::Relaxed) {
        eprintln!("{} {}", "==>".cyan().bold(), msg.bold());
    }
}

pub fn success(msg: &str) {
    tracing::info!("{}", msg);
    if !QUIET.load(Ordering::Relaxed) {
        eprintln!("{} {}", "ok".green().bold(), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        let mut options = LogOptions::default();
        assert_eq!(options.level(), "warn");
        options.verbosity = 1;
        assert_eq!(options.level(), "info");
        options.verbosity = 3;
        assert_eq!(options.level(), "debug");
    }

    #[test]
    fn test_quiet_overrides_verbosity() {
        let options = LogOptions {
            verbosity: 2,
            quiet: true,
            json: false,
            ansi: false,
        };
        assert_eq!(options.level(), "error");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogOptions::default());
        init(LogOptions::default());
        warn("still logging");
    }
}
