use thiserror::Error;

/// Errors that can occur while decoding or building a ledger line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LineError {
    /// One or more validation rules failed.
    #[error("validation failed: {}", join_defects(.0))]
    Validation(Vec<ValidationError>),

    /// A single field could not be decoded.
    #[error("invalid value for field {field}: {message}")]
    Field {
        /// Header name of the offending field (e.g. "ValueDate").
        field: String,
        /// Decoder message, including the attempted patterns for dates.
        message: String,
    },

    /// An amount string is not a decimal number.
    #[error("invalid amount '{0}'")]
    Amount(String),

    /// A date outside the years `YYYYMMDD` can express.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// A fraction too large to express in percent.
    #[error("percentage fraction {0} is out of range")]
    PercentageRange(rust_decimal::Decimal),

    /// Malformed JSON or a JSON value that is not an object.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A non-empty date string that matched neither the ledger-line pattern
/// nor the RFC 3339 fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse date '{input}': expected one of {}", .patterns.join(", "))]
pub struct DateParseError {
    /// The rejected input.
    pub input: String,
    /// Patterns tried, in order.
    pub patterns: Vec<&'static str>,
}

/// A calendar date whose year lies outside `0000..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("date {0} is outside the YYYYMMDD range (years 0000-9999)")]
pub struct DateRangeError(pub chrono::NaiveDate);

/// A single validation defect with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Header name of the invalid field (e.g. "DebitAccount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Defect for a required field that is missing or zero.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} is required");
        Self { field, message }
    }
}

fn join_defects(defects: &[ValidationError]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
