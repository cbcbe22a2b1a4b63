//! Shared domain types.
//!
//! Reports are serializable so a finished scan can be exported as JSON and
//! consumed by whatever renders the dashboard.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FundFailure};

/// Fund ticker, canonicalized to uppercase (`acdc` and `ACDC` are the same fund).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundId(String);

impl FundId {
    /// Validate and canonicalize user or config input.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::usage("Fund identifier must not be empty."));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::usage(format!(
                "Fund identifier '{trimmed}' must be alphanumeric."
            )));
        }
        Ok(Self::canonical(trimmed))
    }

    /// Canonicalize text already known to be alphanumeric (regex captures, constants).
    pub fn canonical(raw: &str) -> Self {
        Self(raw.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form used in fund page URLs.
    pub fn url_segment(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FundId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One parsed "as of" date found on a fund page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRecord {
    pub date: NaiveDate,
    /// The matched node text, trimmed but otherwise as published.
    pub raw_text: String,
    /// The normalized date phrase that was parsed (e.g. `24 Nov 2025`).
    pub date_text: String,
    /// Lowercased, whitespace-collapsed ancestor text. Only used for classification.
    pub context: String,
}

/// Figure families a date record can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Nav,
    Performance,
    Holdings,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Nav, Bucket::Performance, Bucket::Holdings];

    pub fn display_name(self) -> &'static str {
        match self {
            Bucket::Nav => "NAV",
            Bucket::Performance => "Perf",
            Bucket::Holdings => "Holdings",
        }
    }
}

/// Publication deadlines for one fund on one scan date.
///
/// Every date is a Monday–Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationSet {
    pub nav_deadline: NaiveDate,
    pub holdings_deadline: NaiveDate,
    pub distribution_deadline: NaiveDate,
}

/// Outcome for the NAV, performance and holdings columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CategoryStatus {
    /// Not evaluated. Rendered as "checking", never as a verdict.
    Pending,
    Ok { date: NaiveDate, text: String },
    Late { date: NaiveDate, text: String },
    Missing,
    Error,
}

impl CategoryStatus {
    pub fn is_late(&self) -> bool {
        matches!(self, CategoryStatus::Late { .. })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CategoryStatus::Missing)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CategoryStatus::Error)
    }
}

/// Distribution is presence-only: there is no late state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DistributionStatus {
    Pending,
    Ok { date: NaiveDate },
    Missing,
}

/// Per-fund scan result. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundReport {
    pub id: FundId,
    pub nav: CategoryStatus,
    pub performance: CategoryStatus,
    pub holdings: CategoryStatus,
    pub distribution: DistributionStatus,
    /// Reason the fund could not be evaluated, when `nav` is `Error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl FundReport {
    /// A report nothing has been evaluated for yet.
    pub fn pending(id: FundId) -> Self {
        Self {
            id,
            nav: CategoryStatus::Pending,
            performance: CategoryStatus::Pending,
            holdings: CategoryStatus::Pending,
            distribution: DistributionStatus::Pending,
            failure: None,
        }
    }

    /// Collapse a failed unit of work: NAV is forced to `Error`, the rest stay pending.
    pub fn failed(id: FundId, failure: &FundFailure) -> Self {
        Self {
            nav: CategoryStatus::Error,
            failure: Some(failure.to_string()),
            ..Self::pending(id)
        }
    }

    pub fn status(&self, bucket: Bucket) -> &CategoryStatus {
        match bucket {
            Bucket::Nav => &self.nav,
            Bucket::Performance => &self.performance,
            Bucket::Holdings => &self.holdings,
        }
    }

    pub fn has_error(&self) -> bool {
        self.nav.is_error()
    }
}
