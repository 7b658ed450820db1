//! The ledger line record and its renderings.
//!
//! A [`Line`] is built directly, through [`LineBuilder`], or decoded from
//! JSON; [`Line::validate`] reports required-field defects and the
//! `headers`/`to_map`/`to_strings` family renders it for a file writer.
//!
//! # Example
//!
//! ```
//! use ledgerline::core::*;
//! use ledgerline::line::Line;
//!
//! let line = Line {
//!     record_code: RecordCode::new('A'),
//!     value_date: Date::from_ymd(2024, 3, 15).unwrap(),
//!     debit_account: 100,
//!     credit_account: 200,
//!     posting_text: "Invoice 42".into(),
//!     ..Default::default()
//! };
//!
//! assert!(line.validate().is_empty());
//! assert_eq!(&line.to_strings()[..5], &["A", "", "20240315", "100", "200"]);
//! ```

mod builder;
mod fields;
#[cfg(feature = "json")]
mod json;
mod record;
mod validation;

pub use builder::LineBuilder;
pub use record::Line;
