//! Single-character record codes and opaque text codes.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{countries, currencies};

/// One-character tag classifying a line's posting type.
///
/// Decoding keeps the first character of the input; empty input decodes to
/// the absent code rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RecordCode(Option<char>);

impl RecordCode {
    pub const ABSENT: RecordCode = RecordCode(None);

    pub fn new(code: char) -> Self {
        Self(Some(code))
    }

    /// First character of `input`, or the absent code for empty input.
    pub fn parse(input: &str) -> Self {
        Self(input.chars().next())
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<char> {
        self.0
    }
}

impl From<char> for RecordCode {
    fn from(code: char) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for RecordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

impl Serialize for RecordCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordCodeVisitor)
    }
}

struct RecordCodeVisitor;

impl Visitor<'_> for RecordCodeVisitor {
    type Value = RecordCode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record code string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordCode, E> {
        Ok(RecordCode::parse(v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<RecordCode, E> {
        Ok(RecordCode::new(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RecordCode, E> {
        Ok(RecordCode::ABSENT)
    }

    fn visit_none<E: de::Error>(self) -> Result<RecordCode, E> {
        Ok(RecordCode::ABSENT)
    }
}

/// ISO 4217 currency code of a foreign-currency amount. Stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is a commonly used ISO 4217 code.
    pub fn is_known(&self) -> bool {
        currencies::is_known_currency_code(&self.0)
    }
}

/// ISO 3166-1 alpha-2 country code. Stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(pub String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is an assigned ISO 3166-1 alpha-2 code.
    pub fn is_known(&self) -> bool {
        countries::is_known_country_code(&self.0)
    }
}

/// Contact email address. Stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(pub String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! text_code_impls {
    ($($ty:ident),*) => {$(
        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

text_code_impls!(CurrencyCode, CountryCode, EmailAddress);
