//! Ticker discovery from the fund index page.

use std::collections::BTreeSet;
use std::sync::Arc;

use regex::Regex;
use tracing::{info, warn};

use crate::data::HttpSource;
use crate::domain::{FundId, MonitorConfig};
use crate::error::{AppError, FetchError};

/// Fund links look like `/funds/acdc/`.
const FUND_LINK_PATTERN: &str = r"/funds/([a-zA-Z0-9]{3,6})/";
const MIN_TICKER_LEN: usize = 3;

/// "Give me the current ticker set." Implementations never fail.
pub trait TickerSource: Send + Sync {
    fn tickers(&self) -> Vec<FundId>;
}

pub struct TickerDiscovery {
    http: Arc<dyn HttpSource>,
    index_url: String,
    force_include: Vec<FundId>,
    fallback: Vec<FundId>,
    blacklist: Vec<String>,
    link_pattern: Regex,
}

impl TickerDiscovery {
    pub fn new(http: Arc<dyn HttpSource>, config: &MonitorConfig) -> Result<Self, AppError> {
        let link_pattern = Regex::new(FUND_LINK_PATTERN)
            .map_err(|e| AppError::runtime(format!("Invalid fund link pattern: {e}")))?;
        Ok(Self {
            http,
            index_url: config.index_url(),
            force_include: config.force_include.clone(),
            fallback: config.fallback.clone(),
            blacklist: config.blacklist.clone(),
            link_pattern,
        })
    }

    /// Sorted ticker set; falls back to the static list when the index is unavailable.
    pub fn discover(&self) -> Vec<FundId> {
        match self.try_discover() {
            Ok(tickers) => {
                info!(count = tickers.len(), url = %self.index_url, "discovered tickers");
                tickers
            }
            Err(err) => {
                let tickers = self.fallback_tickers();
                warn!(error = %err, count = tickers.len(), "ticker discovery failed, using fallback list");
                tickers
            }
        }
    }

    /// Fund codes linked from `body`, plus the force-include list, minus the blacklist.
    pub fn extract_tickers(&self, body: &str) -> Vec<FundId> {
        let linked = self
            .link_pattern
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| FundId::canonical(m.as_str()));

        let candidates: BTreeSet<FundId> = linked.chain(self.force_include.iter().cloned()).collect();

        candidates
            .into_iter()
            .filter(|id| !self.is_blacklisted(id) && id.len() >= MIN_TICKER_LEN)
            .collect()
    }

    pub fn fallback_tickers(&self) -> Vec<FundId> {
        let set: BTreeSet<FundId> = self
            .force_include
            .iter()
            .chain(self.fallback.iter())
            .cloned()
            .collect();
        set.into_iter().collect()
    }

    fn is_blacklisted(&self, id: &FundId) -> bool {
        self.blacklist.iter().any(|b| b.eq_ignore_ascii_case(id.as_str()))
    }

    /// Discovery failure as a value, for callers that want to know why.
    pub fn try_discover(&self) -> Result<Vec<FundId>, FetchError> {
        let body = self.http.get_text(&self.index_url, None)?;
        Ok(self.extract_tickers(&body))
    }
}

impl TickerSource for TickerDiscovery {
    fn tickers(&self) -> Vec<FundId> {
        self.discover()
    }
}

/// A fixed ticker list (e.g. tickers given on the command line).
#[derive(Debug, Clone)]
pub struct StaticTickers(pub Vec<FundId>);

impl TickerSource for StaticTickers {
    fn tickers(&self) -> Vec<FundId> {
        let set: BTreeSet<FundId> = self.0.iter().cloned().collect();
        set.into_iter().collect()
    }
}
