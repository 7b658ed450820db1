//! Calendar date field with the ledger-line `YYYYMMDD` encoding.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{DateParseError, DateRangeError};

/// Ledger-line date pattern (`YYYYMMDD`).
pub const LEDGER_DATE_FORMAT: &str = "%Y%m%d";

const RFC3339_PATTERN: &str = "RFC 3339";

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A date that may be absent ("zero").
///
/// Renders and encodes as `YYYYMMDD`; the zero date renders as an empty
/// string. Decoding accepts `YYYYMMDD` first and falls back to RFC 3339
/// timestamps, keeping the calendar date in the timestamp's own offset.
/// Only years `0000..=9999` are representable, so every rendered date
/// parses back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Option<NaiveDate>);

impl Date {
    /// The zero (absent) date.
    pub const ZERO: Date = Date(None);

    /// Wrap a calendar date; fails for years outside `0000..=9999`.
    pub fn new(date: NaiveDate) -> Result<Self, DateRangeError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(Some(date)))
        } else {
            Err(DateRangeError(date))
        }
    }

    /// Build from year/month/day, `None` if the date is invalid or out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|d| Self::new(d).ok())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn naive(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Parse a date string. Empty input yields the zero date.
    ///
    /// Surrounding whitespace is rejected rather than trimmed.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        if input.is_empty() {
            return Ok(Self::ZERO);
        }

        let parse_error = || DateParseError {
            input: input.to_string(),
            patterns: vec![LEDGER_DATE_FORMAT, RFC3339_PATTERN],
        };

        // chrono skips leading whitespace before numeric fields.
        if input.trim() != input {
            return Err(parse_error());
        }

        let date = match NaiveDate::parse_from_str(input, LEDGER_DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                let ts = DateTime::parse_from_rfc3339(input).map_err(|_| parse_error())?;
                tracing::debug!(input, "date decoded via RFC 3339 fallback");
                ts.date_naive()
            }
        };

        Self::new(date).map_err(|_| parse_error())
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateRangeError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(LEDGER_DATE_FORMAT)),
            None => Ok(()),
        }
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateVisitor)
    }
}

struct DateVisitor;

impl Visitor<'_> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YYYYMMDD or RFC 3339 date string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Date, E> {
        Date::parse(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Date, E> {
        Ok(Date::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Date, E> {
        Ok(Date::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn renders_ledger_pattern() {
        assert_eq!(date(2024, 3, 15).to_string(), "20240315");
        assert_eq!(date(999, 1, 2).to_string(), "09990102");
    }

    #[test]
    fn zero_renders_empty() {
        assert_eq!(Date::ZERO.to_string(), "");
        assert!(Date::default().is_zero());
    }

    #[test]
    fn empty_input_is_zero() {
        let d = Date::parse("").unwrap();
        assert!(d.is_zero());
    }

    #[test]
    fn parses_ledger_pattern() {
        assert_eq!(Date::parse("20240315").unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn falls_back_to_rfc3339() {
        assert_eq!(
            Date::parse("2024-03-15T10:30:00Z").unwrap(),
            date(2024, 3, 15)
        );
        // The calendar date is kept in the timestamp's own offset.
        assert_eq!(
            Date::parse("2024-03-15T23:30:00-05:00").unwrap(),
            date(2024, 3, 15)
        );
    }

    #[test]
    fn rejects_invalid_month() {
        let err = Date::parse("2024-13-99").unwrap_err();
        assert_eq!(err.input, "2024-13-99");
        assert_eq!(err.patterns, vec![LEDGER_DATE_FORMAT, RFC3339_PATTERN]);
    }

    #[test]
    fn rejects_elder_dotted_pattern() {
        assert!(Date::parse("15.03.2024").is_err());
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(Date::parse("20240230").is_err());
    }

    #[test]
    fn year_range_boundaries() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(Date::new(last).unwrap().to_string(), "99991231");
        assert_eq!(Date::parse("99991231").unwrap(), Date::new(last).unwrap());
        assert_eq!(date(0, 1, 1).to_string(), "00000101");
        assert_eq!(Date::parse("00000101").unwrap(), date(0, 1, 1));

        let past_end = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert_eq!(Date::new(past_end), Err(DateRangeError(past_end)));
        assert!(Date::from_ymd(-1, 12, 31).is_none());
    }

    #[test]
    fn signed_years_do_not_parse() {
        assert!(Date::parse("+100000101").is_err());
        assert!(Date::parse("-00010101").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert!(Date::parse(" 20240315").is_err());
        assert!(Date::parse("20240315 ").is_err());
        assert!(Date::parse(" 2024-03-15T10:30:00Z").is_err());
    }
}
