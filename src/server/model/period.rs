//! Calendar periods used to filter and group transactions.
//!
//! Reports and listings select rows with inclusive `NaiveDate` ranges rather than by
//! comparing date strings, so a period is always converted into a [`DateRange`] before
//! it reaches the data layer.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::server::error::AppError;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range covering January 1st through December 31st of `year`.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - Range for the year
    /// - `Err(AppError::Validation)` - Year outside 1..=9999
    pub fn year(year: i32) -> Result<Self, AppError> {
        let first = YearMonth::new(year, 1)?;
        let last = YearMonth::new(year, 12)?;

        Ok(Self {
            start: first.first_day(),
            end: last.last_day(),
        })
    }

    /// Range covering every day of the given month.
    pub fn month(period: YearMonth) -> Self {
        Self {
            start: period.first_day(),
            end: period.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A calendar month, written canonically as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month after checking year and month bounds.
    ///
    /// # Returns
    /// - `Ok(YearMonth)` - Valid month
    /// - `Err(AppError::Validation)` - Year outside 1..=9999 or month outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        if !(1..=9999).contains(&year) {
            return Err(AppError::Validation(format!(
                "Year must be between 1 and 9999, got {}",
                year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        Ok(Self { year, month })
    }

    /// Parses a user supplied `YYYY-MM` string.
    ///
    /// # Returns
    /// - `Ok(YearMonth)` - Parsed month
    /// - `Err(AppError::Validation)` - Malformed string or out of range values
    pub fn parse(value: &str) -> Result<Self, AppError> {
        value.parse::<Self>().map_err(AppError::Validation)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Bounds are checked on construction so every month has a first day.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };

        next_first
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The twelve months of `year` in calendar order.
    pub fn months_of(year: i32) -> Result<Vec<Self>, AppError> {
        (1..=12).map(|month| Self::new(year, month)).collect()
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("Expected month as YYYY-MM, got '{}'", value);

        let (year, month) = value.split_once('-').ok_or_else(malformed)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) {
            return Err(malformed());
        }
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;

        Self::new(year, month).map_err(|e| e.to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_canonical_month() {
        let ym = YearMonth::parse("2025-03").unwrap();
        assert_eq!((ym.year(), ym.month()), (2025, 3));
        assert_eq!(ym.to_string(), "2025-03");
    }

    #[test]
    fn rejects_malformed_months() {
        for bad in [
            "2025-3", "2025-13", "25-03", "2025/03", "2025-00", "abcd-ef", "", "+025-03", "2025-+3",
        ] {
            assert!(
                matches!(YearMonth::parse(bad), Err(AppError::Validation(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn month_range_handles_leap_years_and_december() {
        let feb = DateRange::month(YearMonth::new(2024, 2).unwrap());
        assert_eq!(feb.start, date(2024, 2, 1));
        assert_eq!(feb.end, date(2024, 2, 29));

        let dec = DateRange::month(YearMonth::new(2025, 12).unwrap());
        assert_eq!(dec.end, date(2025, 12, 31));
    }

    #[test]
    fn year_range_is_inclusive() {
        let range = DateRange::year(2025).unwrap();
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 12, 31)));
        assert!(!range.contains(date(2026, 1, 1)));
        assert!(!range.contains(date(2024, 12, 31)));
    }

    #[test]
    fn year_out_of_bounds_is_validation_error() {
        assert!(matches!(DateRange::year(0), Err(AppError::Validation(_))));
        assert!(matches!(DateRange::year(10000), Err(AppError::Validation(_))));
        assert!(DateRange::year(9999).is_ok());
    }

    #[test]
    fn months_of_yields_twelve_keys() {
        let keys: Vec<String> = YearMonth::months_of(2025)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys.len(), 12);
        assert_eq!(keys.first().map(String::as_str), Some("2025-01"));
        assert_eq!(keys.last().map(String::as_str), Some("2025-12"));
    }
}
