//! Input/output helpers.
//!
//! - scan result export as JSON (`export`)

pub mod export;

pub use export::*;
