//! "As of" date extraction from fund page markup.

pub mod context;
pub mod dates;
pub mod extractor;

pub use context::*;
pub use dates::*;
pub use extractor::*;
