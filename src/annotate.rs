//! Per-date reporting records.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::calendar_week::calendar_week_label;
use crate::company::CompanyCalendar;
use crate::consts::DEFAULT_HOLIDAY_YEARS;
use crate::convention::{Convention, RETAIL_454};
use crate::holiday::HolidayCalendar;
use crate::prelude::*;
use crate::range::{DateRange, RangeError};
use crate::types::{CalendarWeekLabel, FiscalWeekId};
use crate::{ParseError, parse_iso_date};

/// Everything reported about one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    /// The annotated date
    pub calendar_date:     NaiveDate,
    /// Gregorian year of the date
    pub calendar_year:     i32,
    /// Fiscal week the date falls in
    pub fiscal_week:       FiscalWeekId,
    /// Sunday-based calendar week label
    pub calendar_week:     CalendarWeekLabel,
    /// Gregorian month name
    pub month_name:        &'static str,
    /// Day of the Gregorian month
    pub day_of_month:      u32,
    /// Full weekday name
    pub weekday_name:      &'static str,
    /// Fiscal month the date's week belongs to
    pub fiscal_month_name: &'static str,
    /// Holiday name, if the date is a holiday
    pub holiday_name:      Option<String>,
}

/// A company's fiscal calendar plus its holiday dataset.
///
/// The holiday dataset is built once and shared read-only, so a
/// `FiscalCalendar` can be cloned cheaply and used from many threads.
#[derive(Debug, Clone)]
pub struct FiscalCalendar {
    ticker:     String,
    convention: Convention,
    holidays:   Arc<HolidayCalendar>,
}

impl FiscalCalendar {
    /// Creates a calendar for `ticker` from a convention and holiday dataset.
    pub fn new(ticker: impl Into<String>, convention: Convention, holidays: HolidayCalendar) -> Self {
        let ticker = ticker.into();
        info!(%ticker, %convention, holidays = holidays.len(), "fiscal calendar ready");
        Self {
            ticker,
            convention,
            holidays: Arc::new(holidays),
        }
    }

    /// Retail 4-5-4 calendar with US federal holidays for the default years.
    pub fn retail() -> Self {
        Self::new("RETAIL", RETAIL_454, HolidayCalendar::us_federal(DEFAULT_HOLIDAY_YEARS))
    }

    /// Calendar for a declared company. Companies without their own holiday
    /// list get the US federal defaults.
    pub fn for_company(company: &CompanyCalendar) -> Self {
        let holidays = if company.holidays.is_empty() {
            HolidayCalendar::us_federal(DEFAULT_HOLIDAY_YEARS)
        } else {
            HolidayCalendar::from_records(company.holidays.iter().cloned())
        };
        Self::new(company.ticker.clone(), company.convention, holidays)
    }

    /// Returns the ticker this calendar belongs to
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the fiscal convention
    pub const fn convention(&self) -> &Convention {
        &self.convention
    }

    /// Returns the shared holiday dataset
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Start date of the fiscal year containing `date`.
    pub fn fiscal_year_start(&self, date: NaiveDate) -> NaiveDate {
        self.convention.fiscal_year_start(date)
    }

    /// Fiscal week identifier (`YYYYWW`) of `date`.
    pub fn fiscal_week_id(&self, date: NaiveDate) -> FiscalWeekId {
        self.convention.fiscal_week_id(date)
    }

    /// Fiscal month of the week containing `date`.
    pub fn fiscal_month(&self, date: NaiveDate) -> Month {
        self.convention.fiscal_month(self.fiscal_week_id(date).week())
    }

    /// Fiscal weeks touched by `start..=end` under this calendar's convention.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn weeks_between_inclusive(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<FiscalWeekId>, RangeError> {
        Ok(DateRange::new(start, end)?.fiscal_weeks(&self.convention))
    }

    /// Builds the report record for one date.
    pub fn annotate(&self, date: NaiveDate) -> DayRecord {
        let fiscal_week = self.fiscal_week_id(date);
        DayRecord {
            calendar_date: date,
            calendar_year: date.year(),
            fiscal_week,
            calendar_week: calendar_week_label(date),
            month_name: month_of(date).name(),
            day_of_month: date.day(),
            weekday_name: weekday_name(date.weekday()),
            fiscal_month_name: self.convention.fiscal_month(fiscal_week.week()).name(),
            holiday_name: self.holidays.name_on(date).map(str::to_owned),
        }
    }

    /// Annotates every date in parallel; output order matches input order.
    pub fn annotate_all(&self, dates: &[NaiveDate]) -> Vec<DayRecord> {
        let _span = info_span!("annotate", ticker = %self.ticker, rows = dates.len()).entered();
        let records: Vec<DayRecord> = dates.par_iter().map(|&date| self.annotate(date)).collect();
        let holidays = records.iter().filter(|r| r.holiday_name.is_some()).count();
        debug!(holidays, "annotated dates");
        records
    }

    /// Parses `YYYY-MM-DD` strings, then annotates them.
    ///
    /// # Errors
    /// Returns the first `ParseError`; nothing is annotated in that case.
    pub fn annotate_iso<S: AsRef<str>>(&self, dates: &[S]) -> Result<Vec<DayRecord>, ParseError> {
        let parsed = dates
            .iter()
            .map(|s| parse_iso_date(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.annotate_all(&parsed))
    }

    /// Annotates every date of `range`.
    pub fn annotate_range(&self, range: &DateRange) -> Vec<DayRecord> {
        let dates: Vec<NaiveDate> = range.days().collect();
        self.annotate_all(&dates)
    }
}

impl Default for FiscalCalendar {
    fn default() -> Self {
        Self::retail()
    }
}

fn month_of(date: NaiveDate) -> Month {
    (0..date.month0()).fold(Month::January, |month, _| month.succ())
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
