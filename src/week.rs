//! Fiscal week numbering.

use crate::consts::DAYS_IN_WEEK;
use crate::convention::{Convention, RETAIL_454};
use crate::prelude::*;
use crate::types::{FiscalWeekId, WeekNumber};

/// Returns the retail fiscal week identifier (`YYYYWW`) for `date`.
///
/// Early-January dates before the new year's start resolve to the last
/// weeks (52 or 53) of the previous fiscal year.
pub fn fiscal_week_id(date: NaiveDate) -> FiscalWeekId {
    RETAIL_454.fiscal_week_id(date)
}

impl Convention {
    /// Returns the fiscal week identifier for `date` under this convention.
    pub fn fiscal_week_id(&self, date: NaiveDate) -> FiscalWeekId {
        let fiscal_year = self.fiscal_year(date);
        let start = self.start_of_fiscal_year(fiscal_year);
        let day_of_year = (date - start).num_days() + 1;
        // ceil(day / 7)
        let week = (day_of_year + DAYS_IN_WEEK - 1) / DAYS_IN_WEEK;
        FiscalWeekId::new(fiscal_year, WeekNumber::from_bounded(week))
    }

    /// Returns the first day of the given fiscal week.
    pub fn week_start_date(&self, id: FiscalWeekId) -> NaiveDate {
        let offset = i64::from(id.week().get() - 1) * DAYS_IN_WEEK;
        self.start_of_fiscal_year(id.fiscal_year()) + Duration::days(offset)
    }
}
