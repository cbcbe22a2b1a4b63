//! In-memory [`HttpSource`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::data::HttpSource;
use crate::error::FetchError;

#[derive(Default)]
pub(crate) struct FakeSite {
    pages: HashMap<String, Result<String, FetchError>>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<(String, Option<Duration>)>>,
}

impl FakeSite {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub(crate) fn failing(mut self, url: &str, err: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(err));
        self
    }

    pub(crate) fn delay(mut self, url: &str, by: Duration) -> Self {
        self.delays.insert(url.to_string(), by);
        self
    }

    pub(crate) fn hits(&self) -> Vec<String> {
        self.requests().into_iter().map(|(url, _)| url).collect()
    }

    /// Every request seen, with the timeout the caller asked for.
    pub(crate) fn requests(&self) -> Vec<(String, Option<Duration>)> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpSource for FakeSite {
    fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push((url.to_string(), timeout));
        if let Some(delay) = self.delays.get(url) {
            std::thread::sleep(*delay);
        }
        match self.pages.get(url) {
            Some(result) => result.clone(),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
