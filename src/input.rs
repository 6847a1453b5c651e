//! Reading record files
//!
//! Exports can run on records supplied as a JSON file instead of the
//! in-memory store: an array of records for collections, a single object
//! for the risk summary.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{DeskError, DeskResult};

/// Read a JSON value from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> DeskResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(DeskError::Io(format!("File not found: {}", path.display())));
    }

    let file = File::open(path)
        .map_err(|e| DeskError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| DeskError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a JSON array of records
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> DeskResult<Vec<T>> {
    let records: Vec<T> = read_json_required(path.as_ref())?;
    log::debug!("Read {} records from {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Read a single JSON record
pub fn read_record<T: DeserializeOwned>(path: impl AsRef<Path>) -> DeskResult<T> {
    read_json_required(path)
}
