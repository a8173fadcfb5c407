//! Birthday value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format string for the only accepted textual date form.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the shape is checked first.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date regex"));

/// A contact's date of birth.
///
/// Parsed from and rendered back to `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("05.11.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.11.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string into a Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or names a date that does not exist (e.g. `31.02.2001`).
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The same month and day in `year`.
    ///
    /// February 29 falls back to February 28 when `year` is not a leap year.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }
}

impl ValidatedField for Birthday {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("12.03.2024").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    }

    #[test]
    fn test_birthday_round_trip() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "09.09.0999"] {
            assert_eq!(Birthday::new(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(Birthday::new("1.3.2024").is_err());
        assert!(Birthday::new("01.03.24").is_err());
        assert!(Birthday::new("2024-03-01").is_err());
        assert!(Birthday::new("01/03/2024").is_err());
        assert!(Birthday::new(" 01.03.2024").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2001").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
    }

    #[test]
    fn test_anniversary_in_regular_year() {
        let birthday = Birthday::new("16.03.1985").unwrap();
        assert_eq!(
            birthday.anniversary_in(2024),
            NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
        );
    }

    #[test]
    fn test_anniversary_leap_day_clamps_to_feb_28() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(
            birthday.anniversary_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            birthday.anniversary_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.11.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.11.1990\"");

        let parsed: Birthday = serde_json::from_str("\"05.11.1990\"").unwrap();
        assert_eq!(parsed, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"1990-11-05\"");
        assert!(bad.is_err());
    }
}
