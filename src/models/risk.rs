//! Portfolio risk summary

use serde::{Deserialize, Serialize};

/// Headline risk figures shown on the risk dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskSummary {
    /// Letter grade ("A" .. "F")
    pub risk_index: Option<String>,
    pub provenance_score: Option<f64>,
    pub total_assets: Option<u64>,
    pub compliance_percentage: Option<f64>,
}

impl RiskSummary {
    /// Create a fully populated summary
    pub fn new(
        risk_index: impl Into<String>,
        provenance_score: f64,
        total_assets: u64,
        compliance_percentage: f64,
    ) -> Self {
        Self {
            risk_index: Some(risk_index.into()),
            provenance_score: Some(provenance_score),
            total_assets: Some(total_assets),
            compliance_percentage: Some(compliance_percentage),
        }
    }
}
