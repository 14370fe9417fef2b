//! Per-company calendar declarations.
//!
//! Companies are declared in TOML, one table per ticker:
//!
//! ```toml
//! [companies.WMT]
//! year = { begins_on = "02-01" }
//! week = { begins_on = "Saturday" }
//! month = { format = "4-5-4" }
//! holidays = [{ date = "2023-11-24", name = "Black Friday" }]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MIN_DAY};
use crate::convention::{Convention, MonthPattern};
use crate::holiday::HolidayRecord;
use crate::prelude::*;

/// Error type for company configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed or did not match the expected layout.
    #[error("invalid company config: {0}")]
    Toml(#[from] toml::de::Error),

    /// `year.begins_on` is not `MM-01`.
    #[error("invalid year start {0:?} (expected MM-01)")]
    InvalidYearStart(String),

    /// `week.begins_on` is not a weekday name.
    #[error("invalid week start {0:?} (expected a weekday name)")]
    InvalidWeekday(String),

    /// `month.format` is not a known quarter split.
    #[error("unknown month format {0:?} (expected 4-5-4, 4-4-5 or 5-4-4)")]
    UnknownMonthFormat(String),

    /// No company is declared under this ticker.
    #[error("unknown ticker {0:?}")]
    UnknownTicker(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryToml {
    #[serde(default)]
    companies: BTreeMap<String, CompanyToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompanyToml {
    year:     BeginsOn,
    week:     BeginsOn,
    month:    MonthToml,
    #[serde(default)]
    holidays: Vec<HolidayRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BeginsOn {
    begins_on: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MonthToml {
    #[serde(default = "default_month_format")]
    format: String,
}

fn default_month_format() -> String {
    MonthPattern::default().to_string()
}

/// One company's fiscal calendar declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCalendar {
    pub ticker:     String,
    pub convention: Convention,
    pub holidays:   Vec<HolidayRecord>,
}

impl CompanyCalendar {
    fn from_toml(ticker: &str, raw: CompanyToml) -> Result<Self, ConfigError> {
        let anchor_month = parse_year_start(&raw.year.begins_on)?;
        let week_start = raw
            .week
            .begins_on
            .trim()
            .parse::<Weekday>()
            .map_err(|_| ConfigError::InvalidWeekday(raw.week.begins_on.clone()))?;
        let pattern = raw
            .month
            .format
            .parse::<MonthPattern>()
            .map_err(ConfigError::UnknownMonthFormat)?;

        Ok(Self {
            ticker:     ticker.to_uppercase(),
            convention: Convention::new(week_start, anchor_month, pattern),
            holidays:   raw.holidays,
        })
    }
}

/// Parses `MM-01` into the anchor month.
fn parse_year_start(s: &str) -> Result<Month, ConfigError> {
    let invalid = || ConfigError::InvalidYearStart(s.to_owned());
    let (month, day) = s.trim().split_once(DATE_SEPARATOR).ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    if day != MIN_DAY || !(1..=MAX_MONTH).contains(&month) {
        return Err(invalid());
    }
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(invalid)
}

/// Company declarations keyed by upper-case ticker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRegistry {
    companies: BTreeMap<String, CompanyCalendar>,
}

impl CompanyRegistry {
    /// The retailers this crate ships declarations for.
    pub fn builtin() -> Self {
        let retail = Convention::new(Weekday::Sat, Month::February, MonthPattern::FourFiveFour);
        let calendar_year = Convention::new(Weekday::Sat, Month::January, MonthPattern::FourFiveFour);
        let companies = [("LULU", retail), ("WMT", retail), ("TGT", retail), ("AMZN", calendar_year)]
            .into_iter()
            .map(|(ticker, convention)| {
                (
                    ticker.to_owned(),
                    CompanyCalendar {
                        ticker: ticker.to_owned(),
                        convention,
                        holidays: Vec::new(),
                    },
                )
            })
            .collect();
        Self { companies }
    }

    /// Parses a registry from TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if the document or any company entry is invalid.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RegistryToml = toml::from_str(s)?;
        let companies = raw
            .companies
            .into_iter()
            .map(|(ticker, company)| {
                let company = CompanyCalendar::from_toml(&ticker, company)?;
                Ok((company.ticker.clone(), company))
            })
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;
        info!(companies = companies.len(), "loaded company calendars");
        Ok(Self { companies })
    }

    /// Adds every company of `other`, replacing same-ticker entries.
    pub fn merge(&mut self, other: Self) {
        self.companies.extend(other.companies);
    }

    /// Looks up a company by ticker, case-insensitively.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownTicker` if the ticker is not declared.
    pub fn get(&self, ticker: &str) -> Result<&CompanyCalendar, ConfigError> {
        self.companies
            .get(&ticker.trim().to_uppercase())
            .ok_or_else(|| ConfigError::UnknownTicker(ticker.to_owned()))
    }

    /// Declared tickers in alphabetical order
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }
}
