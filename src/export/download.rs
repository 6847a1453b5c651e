//! Delivery of finished export documents
//!
//! A "download" hands a serialized document to a [`DownloadTarget`]. The
//! directory target writes `<dir>/<filename>.<ext>` with an atomic rename so
//! a failed export never leaves a partial file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{DeskError, DeskResult};

use super::ExportFormat;

/// A serialized export ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// File stem, without extension
    pub filename: String,
    pub format: ExportFormat,
    pub body: String,
}

impl ExportDocument {
    /// Create a document, rejecting file stems that are empty or carry a path
    pub fn new(filename: impl Into<String>, format: ExportFormat, body: String) -> DeskResult<Self> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(DeskError::Validation("Export filename cannot be empty".into()));
        }
        if filename.contains(['/', '\\']) || filename == "." || filename == ".." {
            return Err(DeskError::Validation(format!(
                "Export filename must not contain a path: {}",
                filename
            )));
        }

        Ok(Self {
            filename,
            format,
            body,
        })
    }

    /// Full file name including the format extension
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.filename, self.format.extension())
    }

    /// MIME type of the body
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Somewhere finished documents can be delivered
pub trait DownloadTarget {
    /// Deliver a document, returning where it ended up
    fn deliver(&self, document: &ExportDocument) -> DeskResult<PathBuf>;
}

/// Writes documents into a directory
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadTarget for DirectoryTarget {
    fn deliver(&self, document: &ExportDocument) -> DeskResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            DeskError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(document.file_name());
        let temp_path = self.dir.join(format!(".{}.tmp", document.file_name()));

        let file = File::create(&temp_path)
            .map_err(|e| DeskError::Export(format!("Failed to create temp file: {}", e)))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(document.body.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| DeskError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

        // Make sure the data reaches disk before the rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| DeskError::Export(format!("Failed to sync file: {}", e)))?;
        drop(writer);

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DeskError::Export(format!("Failed to rename temp file: {}", e))
        })?;

        log::debug!("Wrote {} bytes to {}", document.body.len(), path.display());
        Ok(path)
    }
}

/// Keeps delivered documents in memory
#[derive(Debug, Default)]
pub struct MemoryTarget {
    documents: RwLock<Vec<ExportDocument>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents delivered so far, oldest first
    pub fn documents(&self) -> DeskResult<Vec<ExportDocument>> {
        let documents = self.documents.read().map_err(|e| {
            DeskError::Export(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(documents.clone())
    }
}

impl DownloadTarget for MemoryTarget {
    fn deliver(&self, document: &ExportDocument) -> DeskResult<PathBuf> {
        let mut documents = self.documents.write().map_err(|e| {
            DeskError::Export(format!("Failed to acquire write lock: {}", e))
        })?;
        documents.push(document.clone());
        Ok(PathBuf::from(document.file_name()))
    }
}

/// Deliver `text` as `<filename>.<ext>`, the extension chosen from `mime_type`
///
/// # Errors
///
/// Returns [`DeskError::Export`] for a MIME type other than the CSV or JSON
/// export types, and any delivery error from the target.
pub fn trigger_download(
    text: String,
    mime_type: &str,
    filename: &str,
    target: &dyn DownloadTarget,
) -> DeskResult<PathBuf> {
    let format = ExportFormat::from_mime_type(mime_type)
        .ok_or_else(|| DeskError::Export(format!("Unsupported MIME type: {}", mime_type)))?;

    let document = ExportDocument::new(filename, format, text)?;
    target.deliver(&document)
}
