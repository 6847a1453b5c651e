//! Legal issue model
//!
//! Legal issues flag a rights problem on a single asset (copyright conflict,
//! expired license, missing release).

use serde::{Deserialize, Serialize};

use super::ids::RecordId;

/// A legal issue raised against an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalIssue {
    pub id: Option<RecordId>,
    /// File name of the affected asset
    pub asset: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    /// Severity label ("Low", "Medium", "High", "Critical")
    pub severity: Option<String>,
    /// Resolution status. Seed data and older records carry none.
    pub status: Option<String>,
    /// Human-readable recency ("2 hours ago")
    pub reported: Option<String>,
}

impl LegalIssue {
    /// Create a new issue against an asset
    pub fn new(asset: impl Into<String>, issue_type: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            id: Some(RecordId::new()),
            asset: Some(asset.into()),
            issue_type: Some(issue_type.into()),
            severity: Some(severity.into()),
            ..Self::default()
        }
    }
}
