//! Blocking HTTP GET behind the [`HttpSource`] trait.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{AppError, FetchError};

/// Something that can GET a URL and hand back its body as text.
///
/// Implementations must report non-success statuses as errors; callers never
/// interpret an error page as content.
pub trait HttpSource: Send + Sync {
    fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, FetchError>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Build a client that sends `user_agent` on every request.
    pub fn new(user_agent: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::runtime(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpSource for HttpClient {
    fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, FetchError> {
        let mut req = self.client.get(url);
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().map_err(|e| request_error(url, &e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}

fn request_error(url: &str, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout { url: url.to_string() }
    } else if err.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
