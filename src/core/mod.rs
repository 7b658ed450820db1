//! Scalar value types, errors, and render configuration.
//!
//! Each value type owns its own parsing, string rendering, and serde codec;
//! the [`line`](crate::line) module composes them into a record.

mod amount;
mod codes;
mod config;
mod countries;
mod currencies;
mod date;
mod error;

pub use amount::*;
pub use codes::*;
pub use config::*;
pub use date::*;
pub use error::*;
