//! Publication calendar: business-day arithmetic, per-fund deadlines and the
//! clock that defines "today".

pub mod business;
pub mod clock;
pub mod expectations;

pub use business::*;
pub use clock::*;
pub use expectations::*;
