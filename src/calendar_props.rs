//! Property tests for the retail calendar arithmetic.

use proptest::prelude::*;

use crate::anchor::fiscal_year_start;
use crate::boundary::{following_or_same_friday, preceding_or_same_saturday};
use crate::convention::{Convention, MonthPattern, RETAIL_454};
use crate::month::retail_month;
use crate::prelude::*;
use crate::range::weeks_between_inclusive;
use crate::test_utils::ymd;
use crate::types::WeekNumber;
use crate::week::fiscal_week_id;

/// Any date from 1990 through 2060.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..25_932).prop_map(|offset| ymd(1990, 1, 1) + Duration::days(offset))
}

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| (0..n).fold(Weekday::Mon, |day, _| day.succ()))
}

fn convention_strategy() -> impl Strategy<Value = Convention> {
    let pattern = prop_oneof![
        Just(MonthPattern::FourFiveFour),
        Just(MonthPattern::FourFourFive),
        Just(MonthPattern::FiveFourFour),
    ];
    (weekday_strategy(), 0u32..12, pattern).prop_map(|(start, month0, pattern)| {
        let anchor = (0..month0).fold(Month::January, |month, _| month.succ());
        Convention::new(start, anchor, pattern)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_preceding_saturday_within_six_days(date in date_strategy()) {
        let saturday = preceding_or_same_saturday(date);
        prop_assert_eq!(saturday.weekday(), Weekday::Sat);
        let gap = (date - saturday).num_days();
        prop_assert!((0..=6).contains(&gap), "{} -> {}", date, saturday);
    }

    #[test]
    fn prop_following_friday_within_six_days(date in date_strategy()) {
        let friday = following_or_same_friday(date);
        prop_assert_eq!(friday.weekday(), Weekday::Fri);
        let gap = (friday - date).num_days();
        prop_assert!((0..=6).contains(&gap), "{} -> {}", date, friday);
    }

    #[test]
    fn prop_year_start_is_saturday_and_monotonic(date in date_strategy(), step in 1i64..400) {
        let start = fiscal_year_start(date);
        prop_assert_eq!(start.weekday(), Weekday::Sat);
        prop_assert!(start <= date);
        prop_assert!(fiscal_year_start(date + Duration::days(step)) >= start);
    }

    #[test]
    fn prop_consecutive_starts_are_52_or_53_weeks_apart(year in 1990i32..2060) {
        let gap = (RETAIL_454.start_of_fiscal_year(year + 1) - RETAIL_454.start_of_fiscal_year(year)).num_days();
        prop_assert!(gap == 364 || gap == 371, "year {} gap {}", year, gap);
    }

    #[test]
    fn prop_week_id_monotonic_and_resets_at_year_start(date in date_strategy()) {
        let today = fiscal_week_id(date);
        let tomorrow = fiscal_week_id(date + Duration::days(1));
        if fiscal_year_start(date + Duration::days(1)) == date + Duration::days(1) {
            prop_assert_eq!(tomorrow.week().get(), 1);
            prop_assert_eq!(tomorrow.fiscal_year(), today.fiscal_year() + 1);
        } else {
            prop_assert!(tomorrow >= today);
            prop_assert!(tomorrow.get() - today.get() <= 1);
        }
    }

    #[test]
    fn prop_weeks_between_has_no_gaps(start in date_strategy(), span in 0i64..800) {
        let end = start + Duration::days(span);
        let weeks = weeks_between_inclusive(start, end).unwrap();
        prop_assert_eq!(weeks.first().copied(), Some(fiscal_week_id(start)));
        prop_assert_eq!(weeks.last().copied(), Some(fiscal_week_id(end)));
        for pair in weeks.windows(2) {
            let next_start = RETAIL_454.week_start_date(pair[0]) + Duration::days(7);
            prop_assert_eq!(RETAIL_454.week_start_date(pair[1]), next_start);
        }
    }

    #[test]
    fn prop_any_convention_starts_on_its_week_start(convention in convention_strategy(), date in date_strategy()) {
        let start = convention.fiscal_year_start(date);
        prop_assert_eq!(start.weekday(), convention.week_start());
        prop_assert!(start <= date);
        let weeks = convention.weeks_in_fiscal_year(convention.fiscal_year(date));
        prop_assert!(weeks == 52 || weeks == 53);
        let id = convention.fiscal_week_id(date);
        prop_assert!(id.week().get() <= weeks);
        let _ = convention.fiscal_month(id.week());
    }
}

#[test]
fn retail_months_follow_fiscal_order() {
    let position = |m: Month| (m.number_from_month() + 10) % 12;
    let weeks: Vec<WeekNumber> = (1..=53).filter_map(|n| WeekNumber::new(n).ok()).collect();
    let wraps = weeks
        .windows(2)
        .filter(|pair| position(retail_month(pair[1])) < position(retail_month(pair[0])))
        .count();
    assert_eq!(weeks.len(), 53);
    assert_eq!(wraps, 0);
    assert_eq!(retail_month(weeks[47]), Month::December);
    assert_eq!(retail_month(weeks[48]), Month::January);
}
