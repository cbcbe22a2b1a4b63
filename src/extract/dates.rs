//! The published date format, `24 Nov 2025`.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::AppError;

pub const DATE_FORMAT: &str = "%d %b %Y";

/// Leading "Date as of" / "Data as of" label in front of the date itself.
const AS_OF_PREFIX: &str = r"(?i)^\s*(?:date|data)\s+as\s+of\s+";

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Turns node text like `Data as of 24 Nov 2025, AEST` into a date.
#[derive(Debug, Clone)]
pub struct AsOfParser {
    prefix: Regex,
}

impl AsOfParser {
    pub fn new() -> Result<Self, AppError> {
        let prefix = Regex::new(AS_OF_PREFIX)
            .map_err(|e| AppError::runtime(format!("Invalid as-of prefix pattern: {e}")))?;
        Ok(Self { prefix })
    }

    /// Strip the label, cut at the first comma, trim.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.prefix.replace(text, "");
        stripped.split(',').next().unwrap_or_default().trim().to_string()
    }

    /// The parsed date and the normalized phrase it came from.
    pub fn parse(&self, text: &str) -> Option<(NaiveDate, String)> {
        let cleaned = self.normalize(text);
        parse_date(&cleaned).map(|d| (d, cleaned))
    }
}
