//! Shared scan workflow used by every front-end.
//!
//! discover tickers (cached) -> fan out per-fund checks -> sorted reports -> summary
//!
//! Front-ends only decide how to present a [`ScanRun`].

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::calendar::{Clock, SystemClock, expectations_for};
use crate::data::{HttpClient, HttpSource, TickerCache, TickerDiscovery};
use crate::domain::{ExpectationSet, FundId, FundReport, MonitorConfig};
use crate::error::AppError;
use crate::report::{ScanSummary, summarize};
use crate::scan::ScanOrchestrator;

/// All outputs of one scan.
#[derive(Debug, Clone)]
pub struct ScanRun {
    pub today: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub reports: Vec<FundReport>,
    pub summary: ScanSummary,
}

/// Long-lived monitor: config, clock, cached ticker discovery and the worker pool.
pub struct Monitor {
    config: Arc<MonitorConfig>,
    clock: Arc<dyn Clock>,
    tickers: TickerCache<TickerDiscovery>,
    scanner: ScanOrchestrator,
}

impl Monitor {
    pub fn new(config: MonitorConfig, http: Arc<dyn HttpSource>, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let discovery = TickerDiscovery::new(Arc::clone(&http), &config)?;
        let tickers = TickerCache::new(discovery, Arc::clone(&clock), config.ticker_ttl);
        let scanner = ScanOrchestrator::new(http, Arc::clone(&config))?;
        Ok(Self {
            config,
            clock,
            tickers,
            scanner,
        })
    }

    /// Production wiring: reqwest client and the system clock.
    pub fn from_config(config: MonitorConfig) -> Result<Self, AppError> {
        let http = Arc::new(HttpClient::new(&config.user_agent)?);
        Self::new(config, http, Arc::new(SystemClock))
    }

    /// Today in the reference timezone.
    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.config.timezone)
    }

    pub fn tickers(&self) -> Vec<FundId> {
        self.tickers.get()
    }

    pub fn expectations(&self, id: &FundId, date: Option<NaiveDate>) -> ExpectationSet {
        expectations_for(id, date.unwrap_or_else(|| self.today()), &self.config)
    }

    /// Scan the current (discovered or cached) ticker set.
    pub fn run_scan(&self, date: Option<NaiveDate>) -> ScanRun {
        let started_at = self.clock.now();
        let today = date.unwrap_or_else(|| self.today());
        let reports = self.scanner.scan_source(&self.tickers, today);
        finish(today, started_at, reports)
    }

    /// Scan an explicit ticker list, bypassing discovery.
    pub fn run_scan_for(&self, ids: &[FundId], date: Option<NaiveDate>) -> ScanRun {
        let started_at = self.clock.now();
        let today = date.unwrap_or_else(|| self.today());
        let reports = self.scanner.scan(ids, today);
        finish(today, started_at, reports)
    }
}

fn finish(today: NaiveDate, started_at: DateTime<Utc>, reports: Vec<FundReport>) -> ScanRun {
    let summary = summarize(&reports);
    info!(
        funds = summary.total,
        up_to_date = summary.up_to_date,
        late = summary.late,
        missing = summary.missing,
        errors = summary.errors,
        "scan summary"
    );
    ScanRun {
        today,
        started_at,
        reports,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::calendar::FixedClock;
    use crate::data::fake::FakeSite;
    use crate::domain::{CategoryStatus, DistributionStatus};

    const BASE: &str = "https://example.test/funds";

    const FUND_PAGE: &str = r#"<html><body>
        <div><h4>NAV</h4><div><span>Unit price</span><span>Data as of 24 Nov 2025</span></div></div>
        <div><h4>Returns</h4><div><span>1 month</span><span>Data as of 24 Nov 2025</span></div></div>
        <div><h4>Holdings</h4><div><span>Top 10</span><span>Data as of 25 Nov 2025</span></div></div>
        <p>Distribution 31 Oct 2025</p>
    </body></html>"#;

    fn config() -> MonitorConfig {
        MonitorConfig {
            base_url: BASE.to_string(),
            force_include: vec![FundId::canonical("ETPMAG")],
            workers: 4,
            ..MonitorConfig::default()
        }
    }

    fn clock() -> Arc<FixedClock> {
        // 22:00 UTC on 24 Nov is 09:00 on Tuesday 25 Nov in Sydney.
        Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 11, 24, 22, 0, 0).unwrap()))
    }

    #[test]
    fn scan_uses_discovered_tickers_and_sydney_date() {
        let site = FakeSite::new()
            .page(&format!("{BASE}/"), r#"<a href="/funds/acdc/">ACDC</a><a href="/funds/bank/">BANK</a>"#)
            .page(&format!("{BASE}/acdc/"), FUND_PAGE)
            .page(&format!("{BASE}/bank/"), FUND_PAGE);
        let monitor = Monitor::new(config(), Arc::new(site), clock()).unwrap();

        let run = monitor.run_scan(None);
        assert_eq!(run.today, NaiveDate::from_ymd_opt(2025, 11, 25).unwrap());

        let ids: Vec<&str> = run.reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ACDC", "BANK", "ETPMAG"]);

        let acdc = &run.reports[0];
        assert!(matches!(acdc.nav, CategoryStatus::Ok { .. }));
        assert!(matches!(acdc.performance, CategoryStatus::Ok { .. }));
        assert!(matches!(acdc.holdings, CategoryStatus::Ok { .. }));
        assert!(matches!(acdc.distribution, DistributionStatus::Ok { .. }));

        // ETPMAG is force-included but has no page: 404 -> error, scan still completes.
        assert!(run.reports[2].has_error());
        assert_eq!(run.summary.total, 3);
        assert_eq!(run.summary.up_to_date, 2);
        assert_eq!(run.summary.errors, 1);
    }

    #[test]
    fn ticker_set_is_cached_between_scans() {
        let site = Arc::new(FakeSite::new().page(&format!("{BASE}/"), r#"<a href="/funds/acdc/">ACDC</a>"#));
        let monitor = Monitor::new(config(), site.clone(), clock()).unwrap();

        let first = monitor.tickers();
        let second = monitor.tickers();
        assert_eq!(first, second);
        let index_hits = site.hits().iter().filter(|u| u.as_str() == "https://example.test/funds/").count();
        assert_eq!(index_hits, 1);
    }

    #[test]
    fn explicit_tickers_skip_discovery() {
        let site = Arc::new(FakeSite::new().page(&format!("{BASE}/acdc/"), FUND_PAGE));
        let monitor = Monitor::new(config(), site.clone(), clock()).unwrap();

        let run = monitor.run_scan_for(&[FundId::canonical("ACDC")], NaiveDate::from_ymd_opt(2025, 11, 26));
        assert_eq!(run.reports.len(), 1);
        assert_eq!(site.hits(), vec!["https://example.test/funds/acdc/".to_string()]);
        // On Wednesday the 24 Nov NAV is a day behind the T-1 deadline.
        assert!(run.reports[0].nav.is_late());
    }

    #[test]
    fn expectations_default_to_clock_date() {
        let monitor = Monitor::new(config(), Arc::new(FakeSite::new()), clock()).unwrap();
        let exp = monitor.expectations(&FundId::canonical("USTB"), None);
        assert_eq!(exp.nav_deadline, NaiveDate::from_ymd_opt(2025, 11, 21).unwrap());
    }
}
