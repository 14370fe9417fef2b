//! Plain calendar week labels.
//!
//! Week 1 of a year is the week containing January 1, with weeks running
//! Sunday to Saturday. This is a reporting view independent of fiscal weeks.

use crate::consts::{DAYS_IN_WEEK, JANUARY, MIN_DAY, WEEKS_IN_SHORT_YEAR};
use crate::prelude::*;
use crate::types::{CalendarWeekLabel, WeekNumber};

/// Day number (since the common era) of the Sunday on or before January 1.
#[allow(clippy::expect_used)]
fn week_one_start(year: i32) -> i64 {
    let jan1 = NaiveDate::from_ymd_opt(year, JANUARY, MIN_DAY).expect("January 1 exists in every representable year");
    let days_since_sunday = (jan1.weekday().num_days_from_monday() + 1) % 7;
    i64::from(jan1.num_days_from_ce()) - i64::from(days_since_sunday)
}

/// Returns the Sunday-based `YYYYWW` label for `date`.
///
/// Late-December dates that fall in the week holding the next January 1 are
/// labelled week 1 of the next year.
pub fn calendar_week_label(date: NaiveDate) -> CalendarWeekLabel {
    let ordinal = i64::from(date.num_days_from_ce());
    let mut year = date.year();
    let mut week = (ordinal - week_one_start(year)).div_euclid(DAYS_IN_WEEK) + 1;

    if week >= i64::from(WEEKS_IN_SHORT_YEAR) && ordinal >= week_one_start(year + 1) {
        year += 1;
        week = 1;
    }
    CalendarWeekLabel::new(year, WeekNumber::from_bounded(week))
}
