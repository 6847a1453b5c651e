//! Core data models for assetdesk
//!
//! Records mirror the dashboard's JSON shapes. All fields are optional so
//! incomplete records load without error; defaults are applied when a record
//! is projected into an export row.

pub mod creator;
pub mod date;
pub mod ids;
pub mod issue;
pub mod project;
pub mod risk;

pub use creator::Creator;
pub use date::DateValue;
pub use ids::RecordId;
pub use issue::LegalIssue;
pub use project::Project;
pub use risk::RiskSummary;
