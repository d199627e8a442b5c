// SPDX-License-Identifier: MIT

//!
//! The Lifetimes date type
//!

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;
use thiserror::Error;

/// The minimum year allowed in the Lifetimes system
pub const MIN_YEAR: i64 = -50000;

/// The maximum year allowed in the Lifetimes system
pub const MAX_YEAR: i64 = 10000;

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The date string is empty
    #[error("Date string is empty")]
    Empty,

    /// A date component is not a number
    #[error("`{0}` is not a numeric date component")]
    NotNumeric(String),

    /// The date string has more than year, month and day components
    #[error("`{0}` has too many components")]
    TooManyComponents(String),

    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year number is not allowed (must be [`MIN_YEAR`] <= year <=
    /// [`MAX_YEAR`], and never 0 - year 0 does not exist on the proleptic
    /// Gregorian calendar)
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),
}

/// The Lifetimes day type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The Lifetimes month type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The Lifetimes year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`].  Year 0 is never allowed: year -1 is immediately followed by
/// year 1.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }

    /// The year that follows this one.  Year 0 is skipped: the successor of
    /// year -1 is year 1
    pub fn successor(&self) -> Self {
        match self.0 {
            -1 => Year(1),
            value => Year(value + 1),
        }
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value != 0 && (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

/// The Lifetimes date type
///
/// Totally ordered by the (year, month, day) triple with the year signed.
/// A date parsed without a month or day takes 1 for the missing fields, so a
/// month-only date and the first of that month are indistinguishable once
/// parsed.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// A signed span between two [`Date`]s, in fractional years
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct YearSpan(f64);

impl YearSpan {
    /// The span as a fractional-year count
    pub fn as_years(&self) -> f64 {
        self.0
    }

    /// This span as a dimensionless fraction of another
    pub fn ratio_of(&self, total: YearSpan) -> f64 {
        self.0 / total.0
    }
}

impl Date {
    /// Create a new [`Date`] if the result will be valid
    pub fn from(year: i64, month: i64, day: i64) -> Result<Date, DateError> {
        Ok(Date {
            year: Year::try_from(year)?,
            month: Month::try_from(month)?,
            day: Day::try_from(day)?,
        })
    }

    /// The first day of the given year
    pub fn first_of_year(year: Year) -> Date {
        Date {
            year,
            month: Month(1),
            day: Day(1),
        }
    }

    /// Parse a date string of the form `[-]YEAR[-MONTH[-DAY]]`
    ///
    /// The year may be fewer than four digits and is zero-padded to four
    /// before conversion.  A leading `-` negates the year value directly - no
    /// astronomical-year offset is applied, so `-0100` is year -100.  Missing
    /// month and day components are taken as 1.
    pub fn parse(text: &str) -> Result<Date, DateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DateError::Empty);
        }

        // A leading `-` marks a BCE year and is not a component separator
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if unsigned.is_empty() {
            return Err(DateError::NotNumeric(text.to_string()));
        }

        // `split` always yields at least one item
        let mut components = unsigned.split('-');
        let year_text = components.next().unwrap_or_default();

        let year_text = format!("{year_text:0>4}");
        let year = parse_component(&year_text)?;
        let year = if negative { -year } else { year };

        let month = components.next().map(parse_component).transpose()?;
        let day = components.next().map(parse_component).transpose()?;
        if components.next().is_some() {
            return Err(DateError::TooManyComponents(text.to_string()));
        }

        Date::from(year, month.unwrap_or(1), day.unwrap_or(1))
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Day {
        self.day
    }

    /// Position of the date on a linear axis, in fractional years
    ///
    /// The missing year 0 is collapsed so that the last day of 1 BCE and the
    /// first day of 1 CE are a day apart, not a year and a day.
    fn axis_years(&self) -> f64 {
        let year = self.year.value();
        let year_index = if year > 0 { year - 1 } else { year };
        f64::from(year_index)
            + f64::from(self.month.value() - 1) / 12.0
            + f64::from(self.day.value() - 1) / 365.0
    }
}

fn parse_component(text: &str) -> Result<i64, DateError> {
    text.parse::<i64>()
        .map_err(|_| DateError::NotNumeric(text.to_string()))
}

impl Sub for Date {
    type Output = YearSpan;

    fn sub(self, earlier: Self) -> YearSpan {
        YearSpan(self.axis_years() - earlier.axis_years())
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Date::parse(text)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.value();
        let sign = if year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            year.abs(),
            self.month.value(),
            self.day.value()
        )
    }
}

// The wire form of a date is its string form
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from() {
        // Should return error
        assert!(Date::from(0, 1, 1).is_err());
        assert!(Date::from(999_999, 1, 1).is_err());
        assert!(Date::from(-999_999, 1, 1).is_err());
        assert!(Date::from(1234, 0, 0).is_err());
        assert!(Date::from(1234, 13, 32).is_err());

        // Should be ok
        assert!(Date::from(1, 1, 1).is_ok());
        assert!(Date::from(-1, 12, 31).is_ok());
    }

    #[test]
    fn parse_valid() {
        // Missing month and day are taken as 1
        assert_eq!(
            Date::parse("1800").unwrap(),
            Date::from(1800, 1, 1).unwrap()
        );
        assert_eq!(
            Date::parse("1800-06").unwrap(),
            Date::from(1800, 6, 1).unwrap()
        );
        assert_eq!(
            Date::parse("1800-06-15").unwrap(),
            Date::from(1800, 6, 15).unwrap()
        );

        // A short year is padded to four digits
        assert_eq!(
            Date::parse("85-06-15").unwrap(),
            Date::parse("0085-06-15").unwrap()
        );

        // A leading `-` negates the year value directly
        assert_eq!(
            Date::parse("-0450").unwrap(),
            Date::from(-450, 1, 1).unwrap()
        );
        assert_eq!(Date::parse("-450").unwrap(), Date::from(-450, 1, 1).unwrap());
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Date::parse(""), Err(DateError::Empty));
        assert_eq!(Date::parse("   "), Err(DateError::Empty));
        assert_eq!(
            Date::parse("-"),
            Err(DateError::NotNumeric("-".to_string()))
        );
        assert!(matches!(Date::parse("abcd"), Err(DateError::NotNumeric(_))));
        assert!(matches!(
            Date::parse("1800-xx"),
            Err(DateError::NotNumeric(_))
        ));
        assert!(matches!(
            Date::parse("1800-01-01-05"),
            Err(DateError::TooManyComponents(_))
        ));
        assert_eq!(Date::parse("0000"), Err(DateError::InvalidYear(0)));
        assert_eq!(Date::parse("1800-13"), Err(DateError::InvalidMonth(13)));
        assert_eq!(Date::parse("1800-01-32"), Err(DateError::InvalidDay(32)));
    }

    #[test]
    fn cmp() {
        let bce = Date::parse("-0100").unwrap();
        let ce_start = Date::parse("0001").unwrap();
        let ce_mid = Date::parse("0100-06-15").unwrap();
        assert!(bce < ce_start);
        assert!(ce_start < ce_mid);

        // Difference of 1 day
        assert!(Date::parse("0234-01-02").unwrap() > Date::parse("0234-01-01").unwrap());
    }

    #[test]
    fn era_boundary_is_one_day_wide() {
        let last_bce = Date::parse("-0001-12-31").unwrap();
        let first_ce = Date::parse("0001-01-01").unwrap();
        let span = (first_ce - last_bce).as_years();
        assert!(span > 0.0);
        assert!((span - 1.0 / 365.0).abs() < 1e-9);
    }

    #[test]
    fn subtraction_and_ratio() {
        let a = Date::parse("1800").unwrap();
        let b = Date::parse("1850").unwrap();
        let c = Date::parse("1900").unwrap();
        assert!(((b - a).as_years() - 50.0).abs() < 1e-9);
        assert!(((a - b).as_years() + 50.0).abs() < 1e-9);
        assert!(((b - a).ratio_of(c - a) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn year_successor_skips_zero() {
        let minus_one = Year::try_from(-1).unwrap();
        assert_eq!(minus_one.successor(), Year::try_from(1).unwrap());
        let five = Year::try_from(5).unwrap();
        assert_eq!(five.successor(), Year::try_from(6).unwrap());
    }

    #[test]
    fn display_and_wire_form() {
        let date = Date::parse("-0450").unwrap();
        assert_eq!(date.to_string(), "-0450-01-01");
        assert_eq!(Date::parse(&date.to_string()).unwrap(), date);

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""-0450-01-01""#);
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), date);
    }
}
