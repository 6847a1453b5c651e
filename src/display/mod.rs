//! Terminal display of export rows
//!
//! Renders rows as a table for `preview` and `inspect`. Columns follow the
//! first row, exactly as the CSV header does.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::export::ExportRow;

/// Format rows as a table
pub fn format_rows_table(rows: &[ExportRow]) -> String {
    let Some(first) = rows.first() else {
        return "No records found.".to_string();
    };

    let headers: Vec<String> = first.labels().map(String::from).collect();

    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        builder.push_record(
            headers
                .iter()
                .map(|label| row.get(label).map(ToString::to_string).unwrap_or_default()),
        );
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// One-line summary printed under a table
pub fn format_row_count(count: usize) -> String {
    match count {
        1 => "1 row".to_string(),
        n => format!("{} rows", n),
    }
}
