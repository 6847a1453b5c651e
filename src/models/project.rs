//! Project model
//!
//! A dashboard project groups assets under one owner and tracks their
//! compliance and risk posture.

use serde::{Deserialize, Serialize};

use super::ids::RecordId;

/// A dashboard project
///
/// Every field is optional at the boundary: records are read permissively
/// and gaps are filled in when the project is projected for export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Workflow status ("Active", "Review", "Completed", ...)
    pub status: Option<String>,
    /// Number of assets attached to the project
    pub assets: Option<u32>,
    /// Compliance percentage, 0-100
    pub compliance: Option<f64>,
    /// Risk level label ("Low", "Medium", "High")
    pub risk: Option<String>,
    /// Human-readable recency ("2 hours ago")
    pub updated: Option<String>,
    pub owner: Option<String>,
    pub created_date: Option<String>,
}

impl Project {
    /// Create a new project with a name and status
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: Some(RecordId::new()),
            name: Some(name.into()),
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Display name, empty when unnamed
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
