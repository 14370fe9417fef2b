//! Fiscal month buckets.
//!
//! The retail table below is the 4-5-4 split starting in February; week 53
//! only exists in long years and falls into January.

use crate::consts::{MAX_FISCAL_WEEK, MONTHS_PER_QUARTER, WEEKS_PER_QUARTER};
use crate::convention::{Convention, RETAIL_454};
use crate::prelude::*;
use crate::types::{FiscalWeekId, WeekNumber};

/// Error type for fiscal week lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Week number outside 1-53.
    #[error("Invalid fiscal week: {0} (must be 1-53)")]
    WeekOutOfRange(u8),

    /// Packed identifier whose week suffix is outside 01-53.
    #[error("Invalid fiscal week id {id}: week suffix {week:02} is outside 01-53")]
    MalformedWeekId { id: i32, week: u8 },
}

/// Fiscal month of each retail week, index 0 is week 1.
#[rustfmt::skip]
pub const RETAIL_454_MONTHS: [Month; MAX_FISCAL_WEEK as usize] = [
    // Q1
    Month::February, Month::February, Month::February, Month::February,
    Month::March, Month::March, Month::March, Month::March, Month::March,
    Month::April, Month::April, Month::April, Month::April,
    // Q2
    Month::May, Month::May, Month::May, Month::May,
    Month::June, Month::June, Month::June, Month::June, Month::June,
    Month::July, Month::July, Month::July, Month::July,
    // Q3
    Month::August, Month::August, Month::August, Month::August,
    Month::September, Month::September, Month::September, Month::September, Month::September,
    Month::October, Month::October, Month::October, Month::October,
    // Q4
    Month::November, Month::November, Month::November, Month::November,
    Month::December, Month::December, Month::December, Month::December, Month::December,
    Month::January, Month::January, Month::January, Month::January,
    // week 53
    Month::January,
];

/// Returns the retail fiscal month for a packed `YYYYWW` identifier.
///
/// # Errors
/// Returns `LookupError::MalformedWeekId` if the week suffix is outside 01-53.
pub fn month_for(fiscal_week_id: i32) -> Result<Month, LookupError> {
    let id = FiscalWeekId::try_from(fiscal_week_id)?;
    Ok(retail_month(id.week()))
}

/// Returns the retail fiscal month of `week`.
pub const fn retail_month(week: WeekNumber) -> Month {
    RETAIL_454_MONTHS[(week.get() - 1) as usize]
}

impl FiscalWeekId {
    /// Retail fiscal month this week belongs to.
    pub const fn retail_month(self) -> Month {
        retail_month(self.week())
    }
}

impl Convention {
    /// Returns the fiscal month of `week` under this convention.
    ///
    /// Quarters are 13 weeks split by the month pattern; week 53 joins the
    /// last fiscal month.
    pub fn fiscal_month(&self, week: WeekNumber) -> Month {
        if *self == RETAIL_454 {
            return retail_month(week);
        }
        let index = (week.get() - 1).min(MAX_FISCAL_WEEK - 2);
        let quarter = index / WEEKS_PER_QUARTER;
        let mut offset = index % WEEKS_PER_QUARTER;
        let mut month_in_quarter = 0;
        for weeks in self.pattern().weeks_per_month() {
            if offset < weeks {
                break;
            }
            offset -= weeks;
            month_in_quarter += 1;
        }
        let months_after_anchor = quarter * MONTHS_PER_QUARTER + month_in_quarter;
        (0..months_after_anchor).fold(self.anchor_month(), |month, _| month.succ())
    }
}
