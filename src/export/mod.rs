//! Export module for assetdesk
//!
//! Turns dashboard records into downloadable documents:
//! - `projection`: record → labeled [`ExportRow`]
//! - `csv` / `json`: rows → document text
//! - `download`: document → [`DownloadTarget`]

pub mod csv;
pub mod download;
pub mod json;
pub mod projection;
pub mod row;

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::DeskResult;

pub use self::csv::{escape_csv, parse_csv, serialize_csv, write_csv};
pub use download::{trigger_download, DirectoryTarget, DownloadTarget, ExportDocument, MemoryTarget};
pub use json::{serialize_json, write_json};
pub use projection::{
    creator_to_row, creator_to_row_with, issue_to_row, project_to_row, risk_summary_to_row,
    risk_summary_to_row_at, to_rows, ExportOptions, Exportable,
};
pub use row::{CellValue, ExportRow};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// MIME type used for downloads
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8;",
            Self::Json => "application/json;charset=utf-8;",
        }
    }

    /// Match a MIME type, ignoring parameters and case
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case("text/csv") {
            Some(Self::Csv)
        } else if essence.eq_ignore_ascii_case("application/json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serialize rows in the requested format
pub fn serialize_rows(rows: &[ExportRow], format: ExportFormat) -> DeskResult<String> {
    match format {
        ExportFormat::Csv => serialize_csv(rows),
        ExportFormat::Json => serialize_json(rows),
    }
}

/// Project and serialize records into a document
pub fn build_document<T: Exportable>(
    records: &[T],
    filename: &str,
    format: ExportFormat,
    options: &ExportOptions,
) -> DeskResult<ExportDocument> {
    let rows = to_rows(records, options);
    let body = serialize_rows(&rows, format)?;
    ExportDocument::new(filename, format, body)
}

/// Project, serialize and deliver records in one step
///
/// Nothing is delivered when serialization fails.
pub fn export_records<T: Exportable>(
    records: &[T],
    filename: &str,
    format: ExportFormat,
    options: &ExportOptions,
    target: &dyn DownloadTarget,
) -> DeskResult<PathBuf> {
    let document = build_document(records, filename, format, options)?;
    let location = target.deliver(&document)?;

    log::info!(
        "Exported {} {} as {} to {}",
        records.len(),
        T::ENTITY,
        format,
        location.display()
    );

    Ok(location)
}

/// Default file stem for an entity: `<entity>-<YYYY-MM-DD>`
pub fn default_filename<T: Exportable>() -> String {
    format!("{}-{}", T::ENTITY, chrono::Local::now().format("%Y-%m-%d"))
}
