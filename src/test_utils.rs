use chrono::NaiveDate;

/// Test shorthand for a calendar date known to exist.
#[allow(clippy::expect_used)]
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should exist")
}
