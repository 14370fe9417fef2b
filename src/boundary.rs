//! Week boundary helpers: snapping a date to the start or end of its week.

use crate::prelude::*;

/// Returns the last `week_start` weekday on or before `date`.
///
/// A date that already falls on `week_start` is returned unchanged;
/// otherwise the result is 1-6 days earlier.
pub fn week_start_on_or_before(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    date - Duration::days(i64::from(back))
}

/// Returns the first `week_end` weekday on or after `date`.
///
/// A date that already falls on `week_end` is returned unchanged;
/// otherwise the result is 1-6 days later.
pub fn week_end_on_or_after(date: NaiveDate, week_end: Weekday) -> NaiveDate {
    let ahead = (week_end.num_days_from_monday() + 7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(ahead))
}

/// Returns the Saturday on or before `date`.
pub fn preceding_or_same_saturday(date: NaiveDate) -> NaiveDate {
    week_start_on_or_before(date, Weekday::Sat)
}

/// Returns the Friday on or after `date`.
pub fn following_or_same_friday(date: NaiveDate) -> NaiveDate {
    week_end_on_or_after(date, Weekday::Fri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_saturday_is_returned_unchanged() {
        let saturday = ymd(2023, 1, 28);
        assert_eq!(preceding_or_same_saturday(saturday), saturday);
    }

    #[test]
    fn test_friday_is_returned_unchanged() {
        let friday = ymd(2023, 2, 3);
        assert_eq!(following_or_same_friday(friday), friday);
    }

    #[test]
    fn test_preceding_saturday_cases() {
        struct TestCase {
            date:     NaiveDate,
            expected: NaiveDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:     ymd(2023, 1, 29),
                expected: ymd(2023, 1, 28),
                description: "sunday steps back one day",
            },
            TestCase {
                date:     ymd(2023, 2, 3),
                expected: ymd(2023, 1, 28),
                description: "friday steps back six days",
            },
            TestCase {
                date:     ymd(2024, 1, 2),
                expected: ymd(2023, 12, 30),
                description: "crosses the calendar year",
            },
            TestCase {
                date:     ymd(2024, 3, 1),
                expected: ymd(2024, 2, 24),
                description: "crosses a leap-year february",
            },
        ];

        for case in &cases {
            assert_eq!(preceding_or_same_saturday(case.date), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_following_friday_cases() {
        struct TestCase {
            date:     NaiveDate,
            expected: NaiveDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:     ymd(2023, 1, 28),
                expected: ymd(2023, 2, 3),
                description: "saturday steps forward six days",
            },
            TestCase {
                date:     ymd(2023, 2, 2),
                expected: ymd(2023, 2, 3),
                description: "thursday steps forward one day",
            },
            TestCase {
                date:     ymd(2022, 12, 31),
                expected: ymd(2023, 1, 6),
                description: "crosses the calendar year",
            },
            TestCase {
                date:     ymd(2024, 2, 29),
                expected: ymd(2024, 3, 1),
                description: "leap day rolls into march",
            },
        ];

        for case in &cases {
            assert_eq!(following_or_same_friday(case.date), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_every_weekday_within_six_days() {
        let mut date = ymd(2023, 1, 1);
        for _ in 0..14 {
            let sat = preceding_or_same_saturday(date);
            let fri = following_or_same_friday(date);
            assert_eq!(sat.weekday(), Weekday::Sat);
            assert_eq!(fri.weekday(), Weekday::Fri);
            assert!((0..=6).contains(&(date - sat).num_days()));
            assert!((0..=6).contains(&(fri - date).num_days()));
            date += Duration::days(1);
        }
    }

    #[test]
    fn test_generic_boundaries_for_sunday_weeks() {
        let wednesday = ymd(2023, 6, 14);
        assert_eq!(week_start_on_or_before(wednesday, Weekday::Sun), ymd(2023, 6, 11));
        assert_eq!(week_end_on_or_after(wednesday, Weekday::Sat), ymd(2023, 6, 17));
    }
}
