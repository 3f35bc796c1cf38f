//! JSON output

use serde::Serialize;

use crate::filter::error::FilterError;

/// Pretty-printed JSON of any AST value
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FilterError> {
    Ok(serde_json::to_string_pretty(value)?)
}
