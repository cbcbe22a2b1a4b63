//! Tracing subscriber setup. Logs go to stderr; stdout carries only reports.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Overrides the level chosen from flags, e.g. `FUNDWATCH_LOG=fundwatch=debug`.
pub const LOG_ENV: &str = "FUNDWATCH_LOG";

pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

pub fn init_tracing(verbose: u8, quiet: bool) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::runtime(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "info");
        assert_eq!(level_for(3, false), "debug");
        assert_eq!(level_for(2, true), "error");
    }
}
