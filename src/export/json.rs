//! JSON serialization of export rows
//!
//! Output is indented by two spaces with keys in row order.

use std::io::Write;

use serde::Serialize;

use crate::error::{DeskError, DeskResult};

/// Serialize any value to pretty-printed JSON
///
/// Empty arrays and objects serialize as `[]` and `{}`.
///
/// # Errors
///
/// Returns [`DeskError::Serialization`] if the value cannot be represented
/// as JSON.
pub fn serialize_json<T: Serialize + ?Sized>(value: &T) -> DeskResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| DeskError::Serialization(e.to_string()))
}

/// Write pretty-printed JSON to any writer
pub fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> DeskResult<()> {
    serde_json::to_writer_pretty(writer, value).map_err(|e| DeskError::Serialization(e.to_string()))
}
