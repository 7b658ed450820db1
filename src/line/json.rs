//! JSON encoding and decoding of ledger lines.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::record::Line;
use crate::core::LineError;

impl Line {
    /// Decode a line from a JSON object.
    ///
    /// A field whose value cannot be decoded (e.g. an unparseable date)
    /// aborts decoding with [`LineError::Field`] naming that field. When
    /// several fields are bad, the one reported is the first in key order
    /// (byte-wise by header name), not in document order.
    pub fn from_json(input: &str) -> Result<Self, LineError> {
        let object: Map<String, Value> = serde_json::from_str(input)?;
        Self::from_json_object(object)
    }

    /// Decode a line from an already-parsed JSON object. Errors are reported
    /// as for [`Line::from_json`].
    pub fn from_json_object(object: Map<String, Value>) -> Result<Self, LineError> {
        let value = Value::Object(object);
        Line::deserialize(&value).map_err(|err| match &value {
            Value::Object(object) => offending_field(object).unwrap_or(LineError::Json(err)),
            _ => LineError::Json(err),
        })
    }

    pub fn to_json(&self) -> Result<String, LineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, LineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decode each entry on its own to find the first field that fails.
fn offending_field(object: &Map<String, Value>) -> Option<LineError> {
    object.iter().find_map(|(key, value)| {
        let mut single = Map::new();
        single.insert(key.clone(), value.clone());
        Line::deserialize(&Value::Object(single))
            .err()
            .map(|err| LineError::Field {
                field: key.clone(),
                message: err.to_string(),
            })
    })
}
