//! Reporting utilities: scan summary counts and formatted terminal output.

use serde::Serialize;

use crate::domain::{Bucket, CategoryStatus, DistributionStatus, FundReport};

pub mod format;

pub use format::*;

/// Fund counts for the one-line summary under the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    /// Every column evaluated and on time.
    pub up_to_date: usize,
    /// At least one late column.
    pub late: usize,
    /// At least one missing column.
    pub missing: usize,
    /// Could not be evaluated.
    pub errors: usize,
}

pub fn summarize(reports: &[FundReport]) -> ScanSummary {
    let mut summary = ScanSummary {
        total: reports.len(),
        ..ScanSummary::default()
    };

    for r in reports {
        if r.has_error() {
            summary.errors += 1;
            continue;
        }
        let statuses: Vec<&CategoryStatus> = Bucket::ALL.iter().map(|b| r.status(*b)).collect();
        let late = statuses.iter().any(|s| s.is_late());
        let missing = statuses.iter().any(|s| s.is_missing())
            || r.distribution == DistributionStatus::Missing;
        let pending = statuses.iter().any(|s| matches!(s, CategoryStatus::Pending))
            || r.distribution == DistributionStatus::Pending;

        if late {
            summary.late += 1;
        }
        if missing {
            summary.missing += 1;
        }
        if !late && !missing && !pending {
            summary.up_to_date += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::FundId;
    use crate::error::{FetchError, FundFailure};

    fn ok() -> CategoryStatus {
        CategoryStatus::Ok {
            date: NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
            text: "24 Nov 2025".to_string(),
        }
    }

    fn report(id: &str, nav: CategoryStatus, dist: DistributionStatus) -> FundReport {
        FundReport {
            id: FundId::canonical(id),
            nav,
            performance: ok(),
            holdings: ok(),
            distribution: dist,
            failure: None,
        }
    }

    #[test]
    fn counts_each_fund_once_per_condition() {
        let dist_ok = DistributionStatus::Ok {
            date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
        };
        let late = CategoryStatus::Late {
            date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            text: "20 Nov 2025".to_string(),
        };
        let failure = FundFailure::Fetch(FetchError::Timeout { url: "u".to_string() });
        let reports = vec![
            report("ACDC", ok(), dist_ok.clone()),
            report("BANK", late, DistributionStatus::Missing),
            report("FUEL", CategoryStatus::Missing, dist_ok),
            FundReport::failed(FundId::canonical("HACK"), &failure),
        ];

        let summary = summarize(&reports);
        assert_eq!(
            summary,
            ScanSummary {
                total: 4,
                up_to_date: 1,
                late: 1,
                missing: 2,
                errors: 1,
            }
        );
    }
}
