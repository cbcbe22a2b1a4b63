//! Concurrent scan: one unit of work per fund, run on a fixed-size worker pool.
//!
//! Units share only read-only state. Each finished unit sends its outcome on a
//! completion channel; the calling thread is the single aggregation point and
//! sorts the reports by ticker once every unit has reported.

use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, mpsc};

use chrono::NaiveDate;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::calendar::expectations_for;
use crate::classify::classify;
use crate::data::{FundPageFetcher, HttpSource, TickerSource};
use crate::domain::{FundId, FundReport, MonitorConfig};
use crate::error::{AppError, FundFailure};
use crate::evaluate::evaluate;
use crate::extract::DateContextExtractor;

/// Result of one unit of work: an evaluated report, or why there is none.
pub type UnitOutcome = Result<FundReport, FundFailure>;

/// Fetch → extract → classify → evaluate for a single fund.
pub struct FundChecker {
    fetcher: FundPageFetcher,
    extractor: DateContextExtractor,
    config: Arc<MonitorConfig>,
}

impl FundChecker {
    pub fn new(http: Arc<dyn HttpSource>, config: Arc<MonitorConfig>) -> Result<Self, AppError> {
        Ok(Self {
            fetcher: FundPageFetcher::new(http, &config),
            extractor: DateContextExtractor::new()?,
            config,
        })
    }

    pub fn check(&self, id: &FundId, today: NaiveDate) -> UnitOutcome {
        let expectations = expectations_for(id, today, &self.config);
        let html = self.fetcher.fetch(id)?;
        let page = self.extractor.extract(&html);
        let classification = classify(&page.records, today);
        let report = evaluate(id.clone(), &classification, &page.text, &expectations);
        debug!(fund = %id, records = page.records.len(), "fund evaluated");
        Ok(report)
    }
}

pub struct ScanOrchestrator {
    checker: Arc<FundChecker>,
    pool: ThreadPool,
    workers: usize,
}

impl ScanOrchestrator {
    pub fn new(http: Arc<dyn HttpSource>, config: Arc<MonitorConfig>) -> Result<Self, AppError> {
        let workers = config.workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("fundwatch-worker-{i}"))
            .build()
            .map_err(|e| AppError::runtime(format!("Failed to start worker pool: {e}")))?;
        Ok(Self {
            checker: Arc::new(FundChecker::new(http, config)?),
            pool,
            workers,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scan whatever `source` currently lists.
    pub fn scan_source(&self, source: &dyn TickerSource, today: NaiveDate) -> Vec<FundReport> {
        self.scan(&source.tickers(), today)
    }

    /// One report per distinct ticker, sorted ascending. Never fails as a whole.
    pub fn scan(&self, ids: &[FundId], today: NaiveDate) -> Vec<FundReport> {
        let ids: BTreeSet<FundId> = ids.iter().cloned().collect();
        let total = ids.len();
        info!(funds = total, workers = self.workers, %today, "scan started");

        let (tx, rx) = mpsc::channel::<(FundId, UnitOutcome)>();
        for id in ids {
            let tx = tx.clone();
            let checker = Arc::clone(&self.checker);
            self.pool.spawn(move || {
                let outcome = run_unit(&checker, &id, today);
                // The receiver outlives every unit; a send error means the scan was dropped.
                let _ = tx.send((id, outcome));
            });
        }
        drop(tx);

        let mut reports = Vec::with_capacity(total);
        for (id, outcome) in rx {
            let report = match outcome {
                Ok(report) => report,
                Err(failure) => {
                    warn!(fund = %id, error = %failure, "fund check failed");
                    FundReport::failed(id, &failure)
                }
            };
            reports.push(report);
            debug!(done = reports.len(), total, "unit finished");
        }

        reports.sort_by(|a, b| a.id.cmp(&b.id));
        let failed = reports.iter().filter(|r| r.has_error()).count();
        info!(funds = reports.len(), failed, "scan finished");
        reports
    }
}

fn run_unit(checker: &FundChecker, id: &FundId, today: NaiveDate) -> UnitOutcome {
    panic::catch_unwind(AssertUnwindSafe(|| checker.check(id, today)))
        .unwrap_or_else(|payload| Err(FundFailure::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
