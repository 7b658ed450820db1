//! Money and percentage value types with two-decimal rendering.
//!
//! Values are held as [`Decimal`], never floating point. Two renderings are
//! exposed: the canonical form with a `.` separator (JSON, interchange) and
//! the display form with a `,` separator (ledger-line columns).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::LineError;

/// Decimal separator used by the ledger-line display rendering.
pub const DISPLAY_SEPARATOR: char = ',';

/// Decimal separator used by the canonical rendering.
pub const CANONICAL_SEPARATOR: char = '.';

/// A signed monetary quantity, rendered with exactly two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    pub const ZERO: MonetaryAmount = MonetaryAmount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `1234.50`
    pub fn canonical(&self) -> String {
        format_two_places(self.0, CANONICAL_SEPARATOR)
    }

    /// `1234,50`
    pub fn display(&self) -> String {
        format_two_places(self.0, DISPLAY_SEPARATOR)
    }

    /// Two-decimal rendering with an arbitrary decimal separator.
    pub fn display_with(&self, separator: char) -> String {
        format_two_places(self.0, separator)
    }

    /// Parse a decimal string, accepting either `.` or `,` as separator.
    pub fn parse(input: &str) -> Result<Self, LineError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        Decimal::from_str(&trimmed.replace(DISPLAY_SEPARATOR, "."))
            .map(Self)
            .map_err(|_| LineError::Amount(input.to_string()))
    }
}

impl From<Decimal> for MonetaryAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for MonetaryAmount {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats the canonical rendering.
impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Encodes the canonical string, or the full decimal when rounding to two
/// places would lose sub-cent digits.
impl Serialize for MonetaryAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.round_dp(2) == self.0 {
            serializer.serialize_str(&self.canonical())
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for MonetaryAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = MonetaryAmount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MonetaryAmount, E> {
        Ok(MonetaryAmount(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MonetaryAmount, E> {
        Ok(MonetaryAmount(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MonetaryAmount, E> {
        Decimal::from_f64(v)
            .map(MonetaryAmount)
            .ok_or_else(|| E::custom(format!("amount {v} is out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MonetaryAmount, E> {
        MonetaryAmount::parse(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<MonetaryAmount, E> {
        Ok(MonetaryAmount::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<MonetaryAmount, E> {
        Ok(MonetaryAmount::ZERO)
    }
}

/// A fraction rendered as a percentage: `0.125` renders `12,50%`.
///
/// Fractions whose percent value overflows [`Decimal`] are rejected at
/// construction and when decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage {
    fraction: Decimal,
    percent: Decimal,
}

impl Percentage {
    pub fn new(fraction: Decimal) -> Result<Self, LineError> {
        let percent = fraction
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(LineError::PercentageRange(fraction))?;
        Ok(Self { fraction, percent })
    }

    pub fn fraction(&self) -> Decimal {
        self.fraction
    }

    /// `12.50%`
    pub fn canonical(&self) -> String {
        self.display_with(CANONICAL_SEPARATOR)
    }

    /// `12,50%`
    pub fn display(&self) -> String {
        self.display_with(DISPLAY_SEPARATOR)
    }

    pub fn display_with(&self, separator: char) -> String {
        let mut s = format_two_places(self.percent, separator);
        s.push('%');
        s
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = LineError;

    fn try_from(fraction: Decimal) -> Result<Self, Self::Error> {
        Self::new(fraction)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.fraction, serializer)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fraction = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(fraction).map_err(de::Error::custom)
    }
}

/// Two decimal places with `separator`; values rounding to zero lose their sign.
fn format_two_places(value: Decimal, separator: char) -> String {
    let mut scaled = value.round_dp(2);
    if scaled.is_zero() {
        scaled = Decimal::ZERO;
    }
    let s = format!("{:.2}", scaled);
    if separator == CANONICAL_SEPARATOR {
        s
    } else {
        s.replace(CANONICAL_SEPARATOR, &separator.to_string())
    }
}
