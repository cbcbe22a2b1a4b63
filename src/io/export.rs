//! Export a finished scan as JSON for whatever renders the dashboard.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::FundReport;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanExport {
    pub tool: String,
    pub scan_date: NaiveDate,
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<FundReport>,
}

impl ScanExport {
    pub fn new(scan_date: NaiveDate, generated_at: DateTime<Utc>, reports: Vec<FundReport>) -> Self {
        Self {
            tool: "fundwatch".to_string(),
            scan_date,
            generated_at,
            reports,
        }
    }
}

/// Write scan results to a JSON file.
pub fn write_scan_json(path: &Path, export: &ScanExport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, export)
        .map_err(|e| AppError::usage(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}
