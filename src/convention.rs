//! Fiscal calendar conventions.
//!
//! A [`Convention`] fixes the three things a retail calendar varies on: the
//! weekday a fiscal week starts on, the month whose first week-end anchors
//! the fiscal year, and how each quarter's 13 weeks are split into months.

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// How the 13 weeks of a fiscal quarter are split across its three months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum MonthPattern {
    /// 4, 5 and 4 weeks.
    #[default]
    #[display(fmt = "4-5-4")]
    FourFiveFour,
    /// 4, 4 and 5 weeks.
    #[display(fmt = "4-4-5")]
    FourFourFive,
    /// 5, 4 and 4 weeks.
    #[display(fmt = "5-4-4")]
    FiveFourFour,
}

impl MonthPattern {
    /// Weeks in each month of a quarter, in order.
    pub const fn weeks_per_month(self) -> [u8; 3] {
        match self {
            Self::FourFiveFour => [4, 5, 4],
            Self::FourFourFive => [4, 4, 5],
            Self::FiveFourFour => [5, 4, 4],
        }
    }
}

impl FromStr for MonthPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4-5-4" => Ok(Self::FourFiveFour),
            "4-4-5" => Ok(Self::FourFourFive),
            "5-4-4" => Ok(Self::FiveFourFour),
            other => Err(other.to_owned()),
        }
    }
}

/// The parameters of a fiscal calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Convention {
    week_start:   Weekday,
    anchor_month: Month,
    pattern:      MonthPattern,
}

/// Saturday-to-Friday weeks, year anchored on the first Friday of February,
/// 4-5-4 months. The convention behind every free function in this crate.
pub const RETAIL_454: Convention = Convention::new(Weekday::Sat, Month::February, MonthPattern::FourFiveFour);

impl Convention {
    /// Creates a convention from its parts.
    pub const fn new(week_start: Weekday, anchor_month: Month, pattern: MonthPattern) -> Self {
        Self {
            week_start,
            anchor_month,
            pattern,
        }
    }

    /// First weekday of every fiscal week
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Last weekday of every fiscal week (the day before `week_start`)
    pub fn week_end(&self) -> Weekday {
        self.week_start.pred()
    }

    /// Month whose first week-end closes week 1
    pub const fn anchor_month(&self) -> Month {
        self.anchor_month
    }

    /// Quarter split used for fiscal months
    pub const fn pattern(&self) -> MonthPattern {
        self.pattern
    }
}

impl Default for Convention {
    fn default() -> Self {
        RETAIL_454
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weeks from {:?}, year anchored in {}, {} months",
            self.week_start,
            self.anchor_month.name(),
            self.pattern
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retail_454_is_default() {
        let convention = Convention::default();
        assert_eq!(convention, RETAIL_454);
        assert_eq!(convention.week_start(), Weekday::Sat);
        assert_eq!(convention.week_end(), Weekday::Fri);
        assert_eq!(convention.anchor_month(), Month::February);
        assert_eq!(convention.pattern(), MonthPattern::FourFiveFour);
    }

    #[test]
    fn test_week_end_is_day_before_start() {
        let sunday_weeks = Convention::new(Weekday::Sun, Month::January, MonthPattern::FourFourFive);
        assert_eq!(sunday_weeks.week_end(), Weekday::Sat);
    }

    #[test]
    fn test_pattern_round_trip_strings() {
        for pattern in [MonthPattern::FourFiveFour, MonthPattern::FourFourFive, MonthPattern::FiveFourFour] {
            let text = pattern.to_string();
            assert_eq!(text.parse::<MonthPattern>(), Ok(pattern));
        }
        assert_eq!("4-5-5".parse::<MonthPattern>(), Err("4-5-5".to_owned()));
    }

    #[test]
    fn test_pattern_covers_a_quarter() {
        for pattern in [MonthPattern::FourFiveFour, MonthPattern::FourFourFive, MonthPattern::FiveFourFour] {
            let total: u8 = pattern.weeks_per_month().iter().sum();
            assert_eq!(total, crate::consts::WEEKS_PER_QUARTER);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RETAIL_454.to_string(),
            "weeks from Sat, year anchored in February, 4-5-4 months"
        );
    }
}
