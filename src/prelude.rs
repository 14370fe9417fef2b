//! Prelude module for fiscal_week crate.
//!
//! Re-exports the chrono date types and the derive_more macros used across modules.

#[allow(unused_imports)]
pub use chrono::{Datelike, Duration, Month, NaiveDate, Weekday};
#[allow(unused_imports)]
pub use derive_more::Display;
