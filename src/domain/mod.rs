//! Domain types used throughout the scan.
//!
//! This module defines:
//!
//! - fund identity (`FundId`)
//! - extracted evidence (`DateRecord`, `Bucket`)
//! - deadlines and outcomes (`ExpectationSet`, `CategoryStatus`,
//!   `DistributionStatus`, `FundReport`)
//! - the read-only run configuration (`MonitorConfig`)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
