//! Error types.
//!
//! - [`AppError`] is the application-level error: it carries the process exit
//!   code and a human-readable message, and aborts the command that raised it.
//! - [`FetchError`] and [`FundFailure`] describe why a single fund could not be
//!   evaluated. They never abort a scan; the orchestrator folds them into that
//!   fund's report.

use thiserror::Error;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Bad arguments, config or local IO.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Unexpected failure while running a command.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// A single HTTP GET that did not produce usable page text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("connection to {url} failed: {message}")]
    Connect { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url }
            | FetchError::Connect { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Request { url, .. } => url,
        }
    }
}

/// Why one fund's unit of work produced no evaluated report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FundFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("check panicked: {0}")]
    Panicked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_keeps_exit_code_and_message() {
        let err = AppError::usage("bad ticker");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "bad ticker");
        assert_eq!(AppError::runtime("boom").exit_code(), 4);
    }

    #[test]
    fn fund_failure_wraps_fetch_error_transparently() {
        let fetch = FetchError::Status {
            url: "https://example.test/funds/acdc/".to_string(),
            status: 503,
        };
        let failure = FundFailure::from(fetch.clone());
        assert_eq!(failure.to_string(), fetch.to_string());
        assert_eq!(fetch.url(), "https://example.test/funds/acdc/");
    }
}
