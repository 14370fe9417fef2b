use crate::ParseError;
use crate::consts::{MAX_FISCAL_WEEK, MIN_FISCAL_WEEK, WEEK_ID_MULTIPLIER};
use crate::month::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A week number guaranteed to be in the range `1..=MAX_FISCAL_WEEK` (1..=53)
/// Uses `NonZeroU8` internally, so 0 is not a valid week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekNumber(NonZeroU8);

impl WeekNumber {
    /// Creates a new WeekNumber, validating that it's non-zero and <= `MAX_FISCAL_WEEK`
    ///
    /// # Errors
    /// Returns `LookupError::WeekOutOfRange` if the value is 0 or > `MAX_FISCAL_WEEK`.
    pub fn new(value: u8) -> Result<Self, LookupError> {
        let non_zero = NonZeroU8::new(value).ok_or(LookupError::WeekOutOfRange(value))?;
        if value > MAX_FISCAL_WEEK {
            return Err(LookupError::WeekOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds a week number from a value the caller already bounded.
    pub(crate) fn from_bounded(value: i64) -> Self {
        let (min, max) = (i64::from(MIN_FISCAL_WEEK), i64::from(MAX_FISCAL_WEEK));
        debug_assert!((min..=max).contains(&value));
        let clamped = value.clamp(min, max);
        // clamp keeps the value inside 1..=53, so both conversions hold
        let narrow = u8::try_from(clamped).unwrap_or(MAX_FISCAL_WEEK);
        Self(NonZeroU8::new(narrow).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the week value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for WeekNumber {
    type Error = LookupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekNumber> for u8 {
    fn from(week: WeekNumber) -> Self {
        week.0.get()
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A fiscal week identifier packed as `fiscal_year * 100 + week`.
///
/// Ordering follows the packed integer: by fiscal year, then by week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct FiscalWeekId {
    fiscal_year: i32,
    week:        WeekNumber,
}

impl FiscalWeekId {
    /// Creates an identifier for `week` of `fiscal_year`.
    pub const fn new(fiscal_year: i32, week: WeekNumber) -> Self {
        Self { fiscal_year, week }
    }

    /// Returns the packed `YYYYWW` integer.
    pub const fn get(self) -> i32 {
        self.fiscal_year * WEEK_ID_MULTIPLIER + self.week.get() as i32
    }

    /// Returns the fiscal year component.
    pub const fn fiscal_year(self) -> i32 {
        self.fiscal_year
    }

    /// Returns the 1-based week within the fiscal year.
    pub const fn week(self) -> WeekNumber {
        self.week
    }
}

impl TryFrom<i32> for FiscalWeekId {
    type Error = LookupError;

    /// Unpacks `YYYYWW`, rejecting a week suffix outside 01-53.
    fn try_from(id: i32) -> Result<Self, Self::Error> {
        let fiscal_year = id.div_euclid(WEEK_ID_MULTIPLIER);
        // rem_euclid(100) is always in 0..=99
        let suffix = u8::try_from(id.rem_euclid(WEEK_ID_MULTIPLIER)).unwrap_or(0);
        let week = WeekNumber::new(suffix).map_err(|_| LookupError::MalformedWeekId { id, week: suffix })?;
        Ok(Self { fiscal_year, week })
    }
}

impl From<FiscalWeekId> for i32 {
    fn from(id: FiscalWeekId) -> Self {
        id.get()
    }
}

impl fmt::Display for FiscalWeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A Sunday-anchored calendar week label, rendered as `YYYYWW`.
///
/// Unrelated to [`FiscalWeekId`]: different epoch, different week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarWeekLabel {
    year: i32,
    week: WeekNumber,
}

impl CalendarWeekLabel {
    /// Creates a label for `week` of calendar `year`.
    pub const fn new(year: i32, week: WeekNumber) -> Self {
        Self { year, week }
    }

    /// Returns the calendar year of the label
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the week of the label
    pub const fn week(&self) -> WeekNumber {
        self.week
    }
}

impl fmt::Display for CalendarWeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{}", self.year, self.week)
    }
}

impl FromStr for CalendarWeekLabel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed.len() < 6 || !trimmed.is_char_boundary(trimmed.len() - 2) {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let (year_part, week_part) = trimmed.split_at(trimmed.len() - 2);
        let year = year_part
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let week = week_part
            .parse::<u8>()
            .ok()
            .and_then(|w| WeekNumber::new(w).ok())
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        Ok(Self { year, week })
    }
}

impl Serialize for CalendarWeekLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarWeekLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
