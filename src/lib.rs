//! Retail fiscal calendar arithmetic.
//!
//! Maps calendar dates onto a 52/53-week retail fiscal calendar: weeks run
//! Saturday through Friday, and a fiscal year begins on the Saturday before
//! the Friday that ends the week holding February 1. Each week is identified
//! by a packed `YYYYWW` integer and belongs to one month of a 4-5-4 split.
//!
//! Other week-start days, anchor months and quarter splits are expressed as a
//! [`Convention`]; the free functions all use [`RETAIL_454`].
//!
//! ```
//! use chrono::NaiveDate;
//! use fiscal_week::{fiscal_week_id, fiscal_year_start, month_for};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
//! assert_eq!(fiscal_week_id(date).get(), 202_323);
//! assert_eq!(fiscal_year_start(date), NaiveDate::from_ymd_opt(2023, 1, 28).unwrap());
//! assert_eq!(month_for(202_323).unwrap().name(), "July");
//! ```

mod anchor;
mod annotate;
mod boundary;
mod calendar_week;
mod company;
mod consts;
mod convention;
mod holiday;
mod month;
mod prelude;
mod range;
mod types;
mod week;

#[cfg(test)]
mod calendar_props;
#[cfg(test)]
mod test_utils;

pub use anchor::fiscal_year_start;
pub use annotate::{DayRecord, FiscalCalendar};
pub use boundary::{following_or_same_friday, preceding_or_same_saturday, week_end_on_or_after, week_start_on_or_before};
pub use calendar_week::calendar_week_label;
pub use company::{CompanyCalendar, CompanyRegistry, ConfigError};
pub use consts::*;
pub use convention::{Convention, MonthPattern, RETAIL_454};
pub use holiday::{HolidayCalendar, HolidayRecord};
pub use month::{LookupError, RETAIL_454_MONTHS, month_for, retail_month};
pub use range::{DateRange, RangeError, weeks_between_inclusive};
pub use types::{CalendarWeekLabel, FiscalWeekId, WeekNumber};
pub use week::fiscal_week_id;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `ParseError` if the input is empty, not three numeric
/// `-`-separated parts, or names a month or day that does not exist.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, ParseError> {
    let [year, month, day] = split_date(s)?;
    build_date(year, month, day)
}

/// Parses a `DD-MM-YYYY` date.
///
/// # Errors
/// Same failure modes as [`parse_iso_date`].
pub fn parse_day_first_date(s: &str) -> Result<NaiveDate, ParseError> {
    let [day, month, year] = split_date(s)?;
    build_date(year, month, day)
}

/// Splits a trimmed date string into exactly three `-`-separated parts.
fn split_date(s: &str) -> Result<[&str; 3], ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    <[&str; 3]>::try_from(parts).map_err(|parts| {
        ParseError::InvalidFormat(format!(
            "{trimmed}: expected 2 {DATE_SEPARATOR} separators, found {}",
            parts.len() - 1
        ))
    })
}

fn build_date(year: &str, month: &str, day: &str) -> Result<NaiveDate, ParseError> {
    if year.len() != 4 {
        return Err(ParseError::InvalidFormat(format!("year must have 4 digits: {year}")));
    }
    let year: i32 = parse_component(year)?;
    let month: u32 = parse_component(month)?;
    let day: u32 = parse_component(day)?;

    if !(JANUARY..=MAX_MONTH).contains(&month) {
        return Err(ParseError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDay { year, month, day })
}

/// Parses one numeric component; signs and blanks are rejected.
fn parse_component<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}
