//! CSV serialization of export rows
//!
//! The column set comes from the first row only. A field is quoted iff it
//! contains a comma or a double quote; quoting doubles every internal quote.
//! Lines are joined with `\n` and there is no trailing newline.

use std::io::Write;

use crate::error::{DeskError, DeskResult};

use super::row::{CellValue, ExportRow};

/// Serialize rows to CSV text
///
/// # Errors
///
/// Returns [`DeskError::EmptyInput`] when `rows` is empty, since no header
/// can be derived.
pub fn serialize_csv(rows: &[ExportRow]) -> DeskResult<String> {
    let mut out = Vec::new();
    write_csv(rows, &mut out)?;
    String::from_utf8(out).map_err(|e| DeskError::Export(e.to_string()))
}

/// Write rows as CSV to any writer
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: &mut W) -> DeskResult<()> {
    let first = rows.first().ok_or(DeskError::EmptyInput)?;
    let headers: Vec<&str> = first.labels().collect();

    write!(writer, "{}", headers.join(","))
        .map_err(|e| DeskError::Export(e.to_string()))?;

    for row in rows {
        let line: Vec<String> = headers
            .iter()
            .map(|label| render_field(row.get(label)))
            .collect();

        write!(writer, "\n{}", line.join(","))
            .map_err(|e| DeskError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Render one cell. Only text is ever escaped; a label missing from this
/// row renders as an empty field.
fn render_field(value: Option<&CellValue>) -> String {
    match value {
        Some(CellValue::Text(s)) => escape_csv(s),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Read an exported CSV document back into rows.
///
/// Every cell comes back as text. Short records yield rows with only the
/// columns they carry.
pub fn parse_csv(text: &str) -> DeskResult<Vec<ExportRow>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .zip(record.iter())
            .fold(ExportRow::new(), |row, (label, value)| row.with(label, value));
        rows.push(row);
    }

    Ok(rows)
}
