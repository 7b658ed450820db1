//! # ledgerline
//!
//! Typed ledger-line export records: one accounting posting per [`Line`],
//! with required-field validation and three renderings for file writers —
//! a header-keyed map, an ordered row of display strings, and JSON.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Dates render as `YYYYMMDD`; amounts render with two decimals and a comma
//! separator in display columns, a dot in JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledgerline::line::LineBuilder;
//! use rust_decimal_macros::dec;
//!
//! let line = LineBuilder::new('A', NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 100, 200, "Invoice 42")
//!     .gross_amount(dec!(1234.5))
//!     .build()
//!     .unwrap();
//!
//! let headers = ledgerline::line::Line::headers();
//! let row = line.to_strings();
//! assert_eq!(headers.len(), row.len());
//! assert_eq!(row[9], "1234,50");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Value types, errors, render configuration |
//! | `line` (default) | `Line` record, column registry, validation, builder |
//! | `json` (default) | `Line::from_json` / `Line::to_json` helpers |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "line")]
pub mod line;

// Re-export the record at crate root for convenience
#[cfg(feature = "line")]
pub use crate::line::{Line, LineBuilder};
