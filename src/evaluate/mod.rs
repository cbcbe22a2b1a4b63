//! Staleness verdicts: chosen dates against deadlines.
//!
//! Performance is judged against the NAV deadline. Distribution is
//! presence-only: the expected month-end date either appears on the page or not.

use chrono::NaiveDate;

use crate::classify::Classification;
use crate::domain::{CategoryStatus, DateRecord, DistributionStatus, ExpectationSet, FundId, FundReport};
use crate::extract::format_date;

pub fn dated_status(record: Option<&DateRecord>, deadline: NaiveDate) -> CategoryStatus {
    match record {
        None => CategoryStatus::Missing,
        Some(r) if r.date >= deadline => CategoryStatus::Ok {
            date: r.date,
            text: r.date_text.clone(),
        },
        Some(r) => CategoryStatus::Late {
            date: r.date,
            text: r.date_text.clone(),
        },
    }
}

pub fn distribution_status(page_text: &str, deadline: NaiveDate) -> DistributionStatus {
    let expected = format_date(deadline).to_lowercase();
    if page_text.to_lowercase().contains(&expected) {
        DistributionStatus::Ok { date: deadline }
    } else {
        DistributionStatus::Missing
    }
}

pub fn evaluate(
    id: FundId,
    classification: &Classification,
    page_text: &str,
    expectations: &ExpectationSet,
) -> FundReport {
    FundReport {
        id,
        nav: dated_status(classification.nav.as_ref(), expectations.nav_deadline),
        performance: dated_status(classification.performance.as_ref(), expectations.nav_deadline),
        holdings: dated_status(classification.holdings.as_ref(), expectations.holdings_deadline),
        distribution: distribution_status(page_text, expectations.distribution_deadline),
        failure: None,
    }
}
