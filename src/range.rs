use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boundary::{week_end_on_or_after, week_start_on_or_before};
use crate::consts::DAYS_IN_WEEK;
use crate::convention::{Convention, RETAIL_454};
use crate::prelude::*;
use crate::types::FiscalWeekId;
use crate::{ParseError, RANGE_SEPARATOR, parse_day_first_date};

/// An inclusive range of calendar dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from two `DD-MM-YYYY` strings.
    ///
    /// An empty start means "no range" and yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` for malformed dates and
    /// `RangeError::InvalidRange` if start > end.
    pub fn from_day_first(start: &str, end: &str) -> Result<Option<Self>, RangeError> {
        if start.trim().is_empty() {
            debug!("empty range start, nothing to generate");
            return Ok(None);
        }
        let start = parse_day_first_date(start)?;
        let end = parse_day_first_date(end)?;
        Self::new(start, end).map(Some)
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Fiscal weeks touched by the range, in chronological order.
    ///
    /// The range is widened to whole weeks first, so a range that starts
    /// mid-week still yields that week.
    pub fn fiscal_weeks(&self, convention: &Convention) -> Vec<FiscalWeekId> {
        let first = week_start_on_or_before(self.start, convention.week_start());
        let last = week_end_on_or_after(self.end, convention.week_end());
        let count = ((last - first).num_days() + 1 + DAYS_IN_WEEK - 1) / DAYS_IN_WEEK;

        (0..count)
            .map(|i| convention.fiscal_week_id(self.start + Duration::days(i * DAYS_IN_WEEK)))
            .collect()
    }
}

/// Returns every retail fiscal week touched by `start..=end`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if start > end.
pub fn weeks_between_inclusive(start: NaiveDate, end: NaiveDate) -> Result<Vec<FiscalWeekId>, RangeError> {
    let range = DateRange::new(start, end)?;
    Ok(range.fiscal_weeks(&RETAIL_454))
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{RANGE_SEPARATOR}{}",
            self.start.format("%d-%m-%Y"),
            self.end.format("%d-%m-%Y")
        )
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    /// Parses `DD-MM-YYYY/DD-MM-YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = parse_day_first_date(start_str)?;
                let end = parse_day_first_date(end_str)?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
