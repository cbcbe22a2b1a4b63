//! Fund page fetches.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::data::HttpSource;
use crate::domain::{FundId, MonitorConfig};
use crate::error::FetchError;

/// One bounded-timeout GET per fund page.
#[derive(Clone)]
pub struct FundPageFetcher {
    http: Arc<dyn HttpSource>,
    base_url: String,
    timeout: Duration,
}

impl FundPageFetcher {
    pub fn new(http: Arc<dyn HttpSource>, config: &MonitorConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            timeout: config.page_timeout,
        }
    }

    pub fn url_for(&self, id: &FundId) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), id.url_segment())
    }

    /// Raw page markup, or the reason there is none.
    pub fn fetch(&self, id: &FundId) -> Result<String, FetchError> {
        let url = self.url_for(id);
        debug!(fund = %id, %url, "fetching fund page");
        let body = self.http.get_text(&url, Some(self.timeout))?;
        debug!(fund = %id, bytes = body.len(), "fetched fund page");
        Ok(body)
    }
}
