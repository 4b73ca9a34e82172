//! Textual form of arrays
//!
//! The canonical text of an array is its JSON encoding: a flat array is a
//! JSON array of its elements, a chunked array a JSON array of rows.
//! Non-finite floats encode as `null`.

mod array;

use crate::error::Result;
use crate::types::TypedArray;
use std::fmt;

impl TypedArray {
    /// Canonical JSON text
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// JSON text, surfacing encoder errors
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
