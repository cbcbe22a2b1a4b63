//! Read-only run configuration shared by every unit of work.

use std::time::Duration;

use chrono_tz::Tz;

use super::FundId;

pub const DEFAULT_BASE_URL: &str = "https://www.globalxetfs.com.au/funds";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Funds that publish on a slower cycle and get T-2 / T-1 deadlines.
pub const EXCEPTION_FUNDS: [&str; 3] = ["USTB", "BCOM", "USIG"];
/// Funds scanned even when the index page does not link them.
pub const FORCE_INCLUDE: [&str; 4] = ["ETPMAG", "ETPMPD", "ETPMPM", "ETPMPT"];
/// Path segments under `/funds/` that are site sections, not funds.
pub const BLACKLIST: [&str; 8] = [
    "INDEX", "ABOUT", "MEDIA", "LOGIN", "TERMS", "PRIVACY", "ADMIN", "FUNDS",
];
/// Added to the force-include list when discovery fails.
pub const DEFAULT_FALLBACK: [&str; 2] = ["ACDC", "BANK"];

pub const DEFAULT_PAGE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_TICKER_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Fund pages live at `{base_url}/{ticker}/`; the index is `{base_url}/`.
    pub base_url: String,
    pub user_agent: String,
    /// Zone whose calendar date is "today" for deadline purposes.
    pub timezone: Tz,
    pub exception_funds: Vec<FundId>,
    pub force_include: Vec<FundId>,
    pub blacklist: Vec<String>,
    pub fallback: Vec<FundId>,
    pub page_timeout: Duration,
    pub workers: usize,
    pub ticker_ttl: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timezone: chrono_tz::Australia::Sydney,
            exception_funds: EXCEPTION_FUNDS.iter().map(|t| FundId::canonical(t)).collect(),
            force_include: FORCE_INCLUDE.iter().map(|t| FundId::canonical(t)).collect(),
            blacklist: BLACKLIST.iter().map(|s| s.to_string()).collect(),
            fallback: DEFAULT_FALLBACK.iter().map(|t| FundId::canonical(t)).collect(),
            page_timeout: DEFAULT_PAGE_TIMEOUT,
            workers: DEFAULT_WORKERS,
            ticker_ttl: DEFAULT_TICKER_TTL,
        }
    }
}

impl MonitorConfig {
    pub fn index_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    pub fn is_exception(&self, id: &FundId) -> bool {
        self.exception_funds.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_url_has_single_trailing_slash() {
        let config = MonitorConfig {
            base_url: "https://example.test/funds/".to_string(),
            ..MonitorConfig::default()
        };
        assert_eq!(config.index_url(), "https://example.test/funds/");
    }

    #[test]
    fn defaults_carry_exception_and_blacklist_sets() {
        let config = MonitorConfig::default();
        assert!(config.is_exception(&FundId::canonical("ustb")));
        assert!(!config.is_exception(&FundId::canonical("ACDC")));
        assert!(config.blacklist.iter().any(|b| b == "PRIVACY"));
        assert_eq!(config.workers, 10);
        assert_eq!(config.page_timeout, Duration::from_secs(10));
    }
}
