//! Creator model
//!
//! Creators are the rights holders behind assets. Each carries a registry id,
//! a rights status with a validity window, and profile bookkeeping.

use serde::{Deserialize, Serialize};

use super::date::DateValue;
use super::ids::RecordId;

/// A registered creator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Creator registry id ("CR-2024-0001")
    pub cr_id: Option<String>,
    /// "Individual", "Organization", ...
    #[serde(rename = "type")]
    pub creator_type: Option<String>,
    /// "Active", "Expired", "Pending", ...
    pub rights_status: Option<String>,
    pub valid_from: Option<DateValue>,
    pub valid_through: Option<DateValue>,
    pub risk_level: Option<String>,
    pub assets_count: Option<u32>,
    pub projects_count: Option<u32>,
    /// Profile completion percentage, 0-100
    pub profile_completion: Option<f64>,
    pub registration_source: Option<String>,
    pub created_at: Option<DateValue>,
    pub updated_at: Option<DateValue>,
}

impl Creator {
    /// Create a new creator with a name and email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(RecordId::new()),
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }
}
