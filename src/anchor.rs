//! Fiscal year anchoring.
//!
//! A fiscal year starts on the first day of the week that ends on the first
//! week-end day of the anchor month. Under [`RETAIL_454`] that is the
//! Saturday before the first Friday of February, so the start always lands
//! between January 26 and February 1.

use crate::boundary::week_end_on_or_after;
use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MAX_FISCAL_WEEK, MIN_DAY, WEEK_SPAN_DAYS};
use crate::convention::{Convention, RETAIL_454};
use crate::prelude::*;

/// Returns the start date of the retail fiscal year containing `date`.
///
/// The result is always a Saturday in late January or early February.
pub fn fiscal_year_start(date: NaiveDate) -> NaiveDate {
    RETAIL_454.fiscal_year_start(date)
}

impl Convention {
    /// Returns the fiscal year that `date` belongs to.
    ///
    /// Dates in the months before the anchor month belong to the previous
    /// fiscal year unless their week already ends inside the anchor month.
    /// With a January anchor, late-December dates whose week ends in January
    /// belong to the next fiscal year.
    pub fn fiscal_year(&self, date: NaiveDate) -> i32 {
        let anchor = self.anchor_month().number_from_month();
        let week_end = week_end_on_or_after(date, self.week_end());

        if date.month() < anchor && week_end.month() != anchor {
            date.year() - 1
        } else if anchor == JANUARY && date.month() == DECEMBER && week_end.month() == JANUARY {
            date.year() + 1
        } else {
            date.year()
        }
    }

    /// Returns the first day of fiscal year `fiscal_year`.
    ///
    /// # Panics
    /// Only when `fiscal_year` is outside the range `chrono` can represent.
    #[allow(clippy::expect_used)]
    pub fn start_of_fiscal_year(&self, fiscal_year: i32) -> NaiveDate {
        let first = NaiveDate::from_ymd_opt(fiscal_year, self.anchor_month().number_from_month(), MIN_DAY)
            .expect("the first of a month exists in every representable year");
        week_end_on_or_after(first, self.week_end()) - Duration::days(WEEK_SPAN_DAYS)
    }

    /// Returns the start date of the fiscal year containing `date`.
    pub fn fiscal_year_start(&self, date: NaiveDate) -> NaiveDate {
        self.start_of_fiscal_year(self.fiscal_year(date))
    }

    /// Number of weeks in fiscal year `fiscal_year`: 52, or 53 when the next
    /// start is 371 days away instead of 364.
    pub fn weeks_in_fiscal_year(&self, fiscal_year: i32) -> u8 {
        let days = (self.start_of_fiscal_year(fiscal_year + 1) - self.start_of_fiscal_year(fiscal_year)).num_days();
        debug_assert!(days == 364 || days == 371, "fiscal year {fiscal_year} spans {days} days");
        u8::try_from(days / DAYS_IN_WEEK).unwrap_or(MAX_FISCAL_WEEK)
    }
}
