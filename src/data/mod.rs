//! Network-facing inputs: the HTTP seam, fund page fetches and ticker discovery.

pub mod cache;
pub mod discovery;
pub mod fetch;
pub mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use cache::*;
pub use discovery::*;
pub use fetch::*;
pub use http::*;
