//! Formatted terminal output.
//!
//! All formatting lives here so the scan code stays free of presentation and
//! output changes stay localized.

use chrono::NaiveDate;

use crate::domain::{Bucket, CategoryStatus, DistributionStatus, ExpectationSet, FundId, FundReport};
use crate::extract::format_date;
use crate::report::ScanSummary;

const TICKER_WIDTH: usize = 8;
const STATUS_WIDTH: usize = 18;

pub fn status_label(status: &CategoryStatus) -> String {
    match status {
        CategoryStatus::Pending => "CHECKING".to_string(),
        CategoryStatus::Ok { text, .. } => format!("OK {text}"),
        CategoryStatus::Late { text, .. } => format!("LATE {text}"),
        CategoryStatus::Missing => "MISSING".to_string(),
        CategoryStatus::Error => "ERROR".to_string(),
    }
}

pub fn distribution_label(status: &DistributionStatus) -> String {
    match status {
        DistributionStatus::Pending => "CHECKING".to_string(),
        DistributionStatus::Ok { date } => format!("OK {}", format_date(*date)),
        DistributionStatus::Missing => "MISSING".to_string(),
    }
}

/// Header line for a scan run.
pub fn format_scan_header(today: NaiveDate, funds: usize) -> String {
    format!(
        "=== fundwatch - publication freshness ===\nDate: {} | Funds: {funds}\n",
        format_date(today)
    )
}

/// One row per fund, in the order given.
pub fn format_report_table(reports: &[FundReport]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<tw$} {:<sw$} {:<sw$} {:<sw$} {:<sw$}",
            "Ticker",
            Bucket::Nav.display_name(),
            Bucket::Performance.display_name(),
            Bucket::Holdings.display_name(),
            "Dist",
            tw = TICKER_WIDTH,
            sw = STATUS_WIDTH
        )
        .trim_end(),
    );
    out.push('\n');

    out.push_str(
        format!(
            "{:-<tw$} {:-<sw$} {:-<sw$} {:-<sw$} {:-<sw$}",
            "",
            "",
            "",
            "",
            "",
            tw = TICKER_WIDTH,
            sw = STATUS_WIDTH
        )
        .trim_end(),
    );
    out.push('\n');

    for r in reports {
        out.push_str(
            format!(
                "{:<tw$} {:<sw$} {:<sw$} {:<sw$} {:<sw$}",
                truncate(r.id.as_str(), TICKER_WIDTH),
                status_label(&r.nav),
                status_label(&r.performance),
                status_label(&r.holdings),
                distribution_label(&r.distribution),
                tw = TICKER_WIDTH,
                sw = STATUS_WIDTH
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Failure reasons for funds that could not be evaluated.
pub fn format_failures(reports: &[FundReport]) -> String {
    let mut out = String::new();
    for r in reports {
        if let Some(reason) = &r.failure {
            out.push_str(&format!("{}: {reason}\n", r.id));
        }
    }
    out
}

pub fn format_summary(summary: &ScanSummary) -> String {
    format!(
        "Checked {} funds: {} up to date, {} late, {} missing data, {} errors",
        summary.total, summary.up_to_date, summary.late, summary.missing, summary.errors
    )
}

pub fn format_expectations(id: &FundId, today: NaiveDate, exp: &ExpectationSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("Fund: {id}\n"));
    out.push_str(&format!("Date: {}\n", format_date(today)));
    out.push_str(&format!("NAV / performance due: {}\n", format_date(exp.nav_deadline)));
    out.push_str(&format!("Holdings due:          {}\n", format_date(exp.holdings_deadline)));
    out.push_str(&format!("Distribution date:     {}\n", format_date(exp.distribution_deadline)));
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
