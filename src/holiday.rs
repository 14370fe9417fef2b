//! Holiday datasets.
//!
//! A [`HolidayCalendar`] is built once and then only read, so one instance
//! can be shared behind an `Arc` by every converter and worker thread.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;

/// A named holiday on a given date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
}

impl HolidayRecord {
    /// Creates a holiday record
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Immutable date -> holiday name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    by_date: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Builds a calendar from records. Two holidays on the same date are
    /// joined as `"first; second"`.
    pub fn from_records(records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, String> = BTreeMap::new();
        for HolidayRecord { date, name } in records {
            by_date
                .entry(date)
                .and_modify(|existing| {
                    if !existing.split("; ").any(|n| n == name) {
                        existing.push_str("; ");
                        existing.push_str(&name);
                    }
                })
                .or_insert(name);
        }
        Self { by_date }
    }

    /// United States federal holidays, with `(observed)` entries for
    /// holidays falling on a weekend.
    pub fn us_federal(years: impl IntoIterator<Item = i32>) -> Self {
        let mut records = Vec::new();
        let mut loaded = Vec::new();
        for year in years {
            records.extend(us_federal_year(year));
            loaded.push(year);
        }
        let calendar = Self::from_records(records);
        debug!(years = ?loaded, holidays = calendar.len(), "generated US federal holidays");
        calendar
    }

    /// Holiday name on `date`, if any.
    pub fn name_on(&self, date: NaiveDate) -> Option<&str> {
        self.by_date.get(&date).map(String::as_str)
    }

    /// Checks if `date` is a holiday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    /// Number of holiday dates
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Checks if the calendar has no holidays
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = HolidayRecord> + '_ {
        self.by_date.iter().map(|(date, name)| HolidayRecord::new(*date, name.clone()))
    }
}

impl FromIterator<HolidayRecord> for HolidayCalendar {
    fn from_iter<T: IntoIterator<Item = HolidayRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

/// Weekend holidays are observed on the Friday before or the Monday after.
fn observed(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => Some(date - Duration::days(1)),
        Weekday::Sun => Some(date + Duration::days(1)),
        _ => None,
    }
}

fn us_federal_year(year: i32) -> Vec<HolidayRecord> {
    let fixed = |month, day| NaiveDate::from_ymd_opt(year, month, day);
    let nth = |month, weekday, n| NaiveDate::from_weekday_of_month_opt(year, month, weekday, n);
    let last_monday_of_may = nth(5, Weekday::Mon, 5).or_else(|| nth(5, Weekday::Mon, 4));

    let mut fixed_dates = vec![
        (fixed(1, 1), "New Year's Day"),
        (fixed(7, 4), "Independence Day"),
        (fixed(11, 11), "Veterans Day"),
        (fixed(12, 25), "Christmas Day"),
    ];
    if year >= 2021 {
        fixed_dates.push((fixed(6, 19), "Juneteenth National Independence Day"));
    }

    let mut floating = vec![
        (nth(2, Weekday::Mon, 3), "Washington's Birthday"),
        (last_monday_of_may, "Memorial Day"),
        (nth(9, Weekday::Mon, 1), "Labor Day"),
        (nth(10, Weekday::Mon, 2), "Columbus Day"),
        (nth(11, Weekday::Thu, 4), "Thanksgiving"),
    ];
    if year >= 1986 {
        floating.push((nth(1, Weekday::Mon, 3), "Martin Luther King Jr. Day"));
    }

    let mut records = Vec::new();
    for (date, name) in fixed_dates {
        let Some(date) = date else { continue };
        records.push(HolidayRecord::new(date, name));
        // observed days that fall outside `year` belong to the neighbouring year's list
        if let Some(day_off) = observed(date).filter(|d| d.year() == year) {
            records.push(HolidayRecord::new(day_off, format!("{name} (observed)")));
        }
    }
    records.extend(
        floating
            .into_iter()
            .filter_map(|(date, name)| date.map(|d| HolidayRecord::new(d, name))),
    );
    records.sort();
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_from_records_lookup() {
        let calendar = HolidayCalendar::from_records([
            HolidayRecord::new(ymd(2023, 11, 24), "Black Friday"),
            HolidayRecord::new(ymd(2023, 12, 25), "Christmas Day"),
        ]);
        assert_eq!(calendar.len(), 2);
        assert_eq!(calendar.name_on(ymd(2023, 11, 24)), Some("Black Friday"));
        assert_eq!(calendar.name_on(ymd(2023, 11, 25)), None);
        assert!(calendar.is_holiday(ymd(2023, 12, 25)));
    }

    #[test]
    fn test_same_day_names_are_joined() {
        let calendar: HolidayCalendar = [
            HolidayRecord::new(ymd(2024, 1, 1), "New Year's Day"),
            HolidayRecord::new(ymd(2024, 1, 1), "Inventory Day"),
            HolidayRecord::new(ymd(2024, 1, 1), "New Year's Day"),
        ]
        .into_iter()
        .collect();
        assert_eq!(calendar.name_on(ymd(2024, 1, 1)), Some("New Year's Day; Inventory Day"));
    }

    #[test]
    fn test_us_federal_2023() {
        let calendar = HolidayCalendar::us_federal([2023]);
        let expected = [
            (ymd(2023, 1, 1), "New Year's Day"),
            (ymd(2023, 1, 2), "New Year's Day (observed)"),
            (ymd(2023, 1, 16), "Martin Luther King Jr. Day"),
            (ymd(2023, 2, 20), "Washington's Birthday"),
            (ymd(2023, 5, 29), "Memorial Day"),
            (ymd(2023, 6, 19), "Juneteenth National Independence Day"),
            (ymd(2023, 7, 4), "Independence Day"),
            (ymd(2023, 9, 4), "Labor Day"),
            (ymd(2023, 10, 9), "Columbus Day"),
            (ymd(2023, 11, 10), "Veterans Day (observed)"),
            (ymd(2023, 11, 11), "Veterans Day"),
            (ymd(2023, 11, 23), "Thanksgiving"),
            (ymd(2023, 12, 25), "Christmas Day"),
        ];
        assert_eq!(calendar.len(), expected.len());
        for (date, name) in expected {
            assert_eq!(calendar.name_on(date), Some(name), "date {date}");
        }
    }

    #[test]
    fn test_us_federal_saturday_observed_on_friday() {
        // Christmas 2021 fell on a Saturday
        let calendar = HolidayCalendar::us_federal([2021]);
        assert_eq!(calendar.name_on(ymd(2021, 12, 24)), Some("Christmas Day (observed)"));
    }

    #[test]
    fn test_observed_days_stay_inside_requested_years() {
        // January 1 2022 fell on a Saturday
        let calendar = HolidayCalendar::us_federal([2022]);
        assert_eq!(calendar.name_on(ymd(2021, 12, 31)), None);
        assert_eq!(calendar.name_on(ymd(2022, 1, 1)), Some("New Year's Day"));
        assert_eq!(calendar.name_on(ymd(2022, 12, 26)), Some("Christmas Day (observed)"));

        let defaults = HolidayCalendar::us_federal(crate::consts::DEFAULT_HOLIDAY_YEARS);
        assert!(defaults.iter().all(|h| (2022..=2024).contains(&h.date.year())));
        assert_eq!(defaults.iter().next().map(|h| h.date), Some(ymd(2022, 1, 1)));
    }

    #[test]
    fn test_juneteenth_starts_2021() {
        let before = HolidayCalendar::us_federal([2020]);
        assert!(!before.is_holiday(ymd(2020, 6, 19)));
        let after = HolidayCalendar::us_federal([2021]);
        assert!(after.is_holiday(ymd(2021, 6, 19)) || after.is_holiday(ymd(2021, 6, 18)));
    }

    #[test]
    fn test_iter_in_date_order() {
        let calendar = HolidayCalendar::us_federal([2022, 2023, 2024]);
        let dates: Vec<NaiveDate> = calendar.iter().map(|h| h.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert!(!calendar.is_empty());
    }

    #[test]
    fn test_record_serde() {
        let record = HolidayRecord::new(ymd(2024, 7, 4), "Independence Day");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2024-07-04","name":"Independence Day"}"#);
        let parsed: HolidayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_calendar_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HolidayCalendar>();
    }
}
