//! `fundwatch` library crate.
//!
//! The binary (`fundwatch`) is a thin wrapper around this library so that:
//!
//! - the scan pipeline is testable without network access or spawning processes
//! - a dashboard front-end can reuse the same reports the CLI prints

pub mod app;
pub mod calendar;
pub mod classify;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod io;
pub mod logging;
pub mod report;
pub mod scan;
