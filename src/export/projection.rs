//! Record-to-row projections
//!
//! Each record type has a fixed projection to human-labeled columns. Column
//! order is fixed per type regardless of how the input record was written.
//! Missing fields become `""`, with one exception: a legal issue without a
//! status keeps an undefined `Status` cell.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::date::DEFAULT_DATE_FORMAT;
use crate::models::{Creator, DateValue, LegalIssue, Project, RiskSummary};

use super::row::{CellValue, ExportRow};

/// Options that affect how records are projected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// strftime format for locale date strings
    pub date_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// A record type that can be projected into an export row
pub trait Exportable {
    /// Plural entity label used in default file names and log lines
    const ENTITY: &'static str;

    /// Project this record into a row
    fn to_export_row(&self, options: &ExportOptions) -> ExportRow;
}

/// Map a project to its export columns
pub fn project_to_row(project: &Project) -> ExportRow {
    ExportRow::new()
        .with("Project Name", CellValue::text_or_empty(project.name.as_deref()))
        .with("Description", CellValue::text_or_empty(project.description.as_deref()))
        .with("Status", CellValue::text_or_empty(project.status.as_deref()))
        .with("Assets", CellValue::number_or_empty(project.assets.map(f64::from)))
        .with("Compliance", CellValue::percent_or_empty(project.compliance))
        .with("Risk Level", CellValue::text_or_empty(project.risk.as_deref()))
        .with("Last Updated", CellValue::text_or_empty(project.updated.as_deref()))
        .with("Owner", CellValue::text_or_empty(project.owner.as_deref()))
        .with("Created", CellValue::text_or_empty(project.created_date.as_deref()))
}

/// Map a legal issue to its export columns
pub fn issue_to_row(issue: &LegalIssue) -> ExportRow {
    ExportRow::new()
        .with("Asset", CellValue::text_or_empty(issue.asset.as_deref()))
        .with("Issue Type", CellValue::text_or_empty(issue.issue_type.as_deref()))
        .with("Severity", CellValue::text_or_empty(issue.severity.as_deref()))
        // Passed through as-is: absent status stays undefined
        .with("Status", issue.status.clone())
        .with("Reported", CellValue::text_or_empty(issue.reported.as_deref()))
}

/// Map a creator to its export columns using the default locale date format
pub fn creator_to_row(creator: &Creator) -> ExportRow {
    creator_to_row_with(creator, &ExportOptions::default())
}

/// Map a creator to its export columns
pub fn creator_to_row_with(creator: &Creator, options: &ExportOptions) -> ExportRow {
    let date = |value: &Option<DateValue>| {
        CellValue::Text(
            value
                .as_ref()
                .map(|d| d.to_locale_string(&options.date_format))
                .unwrap_or_default(),
        )
    };

    ExportRow::new()
        .with("Creator Name", CellValue::text_or_empty(creator.name.as_deref()))
        .with("Email", CellValue::text_or_empty(creator.email.as_deref()))
        .with("CR ID", CellValue::text_or_empty(creator.cr_id.as_deref()))
        .with("Type", CellValue::text_or_empty(creator.creator_type.as_deref()))
        .with("Rights Status", CellValue::text_or_empty(creator.rights_status.as_deref()))
        .with("Valid From", date(&creator.valid_from))
        .with("Valid Through", date(&creator.valid_through))
        .with("Risk Level", CellValue::text_or_empty(creator.risk_level.as_deref()))
        .with("Assets Count", CellValue::number_or_empty(creator.assets_count.map(f64::from)))
        .with("Projects Count", CellValue::number_or_empty(creator.projects_count.map(f64::from)))
        .with("Profile Completion", CellValue::percent_or_empty(creator.profile_completion))
        .with(
            "Registration Source",
            CellValue::text_or_empty(creator.registration_source.as_deref()),
        )
        .with("Created", date(&creator.created_at))
        .with("Last Updated", date(&creator.updated_at))
}

/// Map a risk summary to its export columns, stamped with the current time
pub fn risk_summary_to_row(summary: &RiskSummary) -> ExportRow {
    risk_summary_to_row_at(summary, Utc::now())
}

/// Map a risk summary to its export columns, stamped with `exported_at`
pub fn risk_summary_to_row_at(summary: &RiskSummary, exported_at: DateTime<Utc>) -> ExportRow {
    ExportRow::new()
        .with("Risk Index", CellValue::text_or_empty(summary.risk_index.as_deref()))
        .with("Provenance Score", CellValue::number_or_empty(summary.provenance_score))
        .with(
            "Total Assets",
            CellValue::number_or_empty(summary.total_assets.map(|n| n as f64)),
        )
        .with(
            "Compliance Percentage",
            CellValue::percent_or_empty(summary.compliance_percentage),
        )
        .with(
            "Export Date",
            exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
}

impl Exportable for Project {
    const ENTITY: &'static str = "projects";

    fn to_export_row(&self, _options: &ExportOptions) -> ExportRow {
        project_to_row(self)
    }
}

impl Exportable for LegalIssue {
    const ENTITY: &'static str = "legal-issues";

    fn to_export_row(&self, _options: &ExportOptions) -> ExportRow {
        issue_to_row(self)
    }
}

impl Exportable for Creator {
    const ENTITY: &'static str = "creators";

    fn to_export_row(&self, options: &ExportOptions) -> ExportRow {
        creator_to_row_with(self, options)
    }
}

impl Exportable for RiskSummary {
    const ENTITY: &'static str = "risk-summary";

    fn to_export_row(&self, _options: &ExportOptions) -> ExportRow {
        risk_summary_to_row(self)
    }
}

/// Project every record in order
pub fn to_rows<T: Exportable>(records: &[T], options: &ExportOptions) -> Vec<ExportRow> {
    records.iter().map(|r| r.to_export_row(options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::serialize_json;
    use crate::models::RecordId;
    use chrono::{NaiveDate, TimeZone};

    fn test_project() -> Project {
        Project {
            id: Some(RecordId::from("1")),
            name: Some("Test Project".into()),
            status: Some("Active".into()),
            assets: Some(5),
            compliance: Some(92.0),
            risk: Some("Low".into()),
            updated: Some("2 hours ago".into()),
            owner: Some("John Doe".into()),
            created_date: Some("June 15, 2024".into()),
            ..Project::default()
        }
    }

    #[test]
    fn test_project_row_matches_dashboard_export() {
        let row = project_to_row(&test_project());
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Project Name":"Test Project","Description":"","Status":"Active","#,
                r#""Assets":5,"Compliance":"92%","Risk Level":"Low","#,
                r#""Last Updated":"2 hours ago","Owner":"John Doe","Created":"June 15, 2024"}"#
            )
        );
    }

    #[test]
    fn test_project_key_order_ignores_input_order() {
        let json = r#"{"createdDate":"x","owner":"o","risk":"High","name":"n","compliance":10}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let labels: Vec<_> = project_to_row(&project).labels().map(String::from).collect();
        assert_eq!(
            labels,
            vec![
                "Project Name",
                "Description",
                "Status",
                "Assets",
                "Compliance",
                "Risk Level",
                "Last Updated",
                "Owner",
                "Created"
            ]
        );
    }

    #[test]
    fn test_project_missing_optionals_are_empty() {
        let row = project_to_row(&Project::default());
        assert_eq!(row.get("Description"), Some(&CellValue::from("")));
        assert_eq!(row.get("Owner"), Some(&CellValue::from("")));
        assert_eq!(row.get("Created"), Some(&CellValue::from("")));
        assert_eq!(row.get("Compliance"), Some(&CellValue::from("")));
    }

    #[test]
    fn test_issue_without_status_keeps_undefined() {
        let json = r#"{"id":1,"asset":"test-image.jpg","type":"Copyright Conflict","severity":"High","reported":"2 hours ago"}"#;
        let issue: LegalIssue = serde_json::from_str(json).unwrap();
        let row = issue_to_row(&issue);

        assert_eq!(row.get("Status"), Some(&CellValue::Undefined));
        assert_eq!(row.get("Asset"), Some(&CellValue::from("test-image.jpg")));
        assert_eq!(row.get("Issue Type"), Some(&CellValue::from("Copyright Conflict")));
        assert_eq!(row.len(), 5);

        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("Status"));
    }

    #[test]
    fn test_issue_with_status() {
        let mut issue = LegalIssue::new("song.mp3", "License Expired", "Medium");
        issue.status = Some("Open".into());
        assert_eq!(issue_to_row(&issue).get("Status"), Some(&CellValue::from("Open")));
    }

    #[test]
    fn test_creator_dates_normalize_from_either_form() {
        let creator = Creator {
            name: Some("Ava Chen".into()),
            valid_from: Some(DateValue::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())),
            valid_through: Some(DateValue::from("2025-12-31")),
            profile_completion: Some(85.0),
            assets_count: Some(12),
            ..Creator::default()
        };
        let row = creator_to_row(&creator);

        assert_eq!(row.get("Valid From"), Some(&CellValue::from("1/1/2024")));
        assert_eq!(row.get("Valid Through"), Some(&CellValue::from("12/31/2025")));
        assert_eq!(row.get("Profile Completion"), Some(&CellValue::from("85%")));
        assert_eq!(row.get("Assets Count"), Some(&CellValue::Number(12.0)));
        assert_eq!(row.get("Created"), Some(&CellValue::from("")));
        assert_eq!(row.len(), 14);
        assert_eq!(row.labels().last(), Some("Last Updated"));
    }

    #[test]
    fn test_creator_respects_date_format_option() {
        let creator = Creator {
            valid_from: Some(DateValue::from("2024-03-09")),
            ..Creator::default()
        };
        let options = ExportOptions {
            date_format: "%Y/%m/%d".into(),
        };
        let row = creator.to_export_row(&options);
        assert_eq!(row.get("Valid From"), Some(&CellValue::from("2024/03/09")));
    }

    #[test]
    fn test_risk_summary_row() {
        let summary = RiskSummary::new("A", 94.2, 2847, 87.0);
        let at = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        let row = risk_summary_to_row_at(&summary, at);

        let json = serialize_json(&row).unwrap();
        assert_eq!(
            json,
            "{\n  \"Risk Index\": \"A\",\n  \"Provenance Score\": 94.2,\n  \"Total Assets\": 2847,\n  \
             \"Compliance Percentage\": \"87%\",\n  \"Export Date\": \"2025-02-03T04:05:06.000Z\"\n}"
        );
    }

    #[test]
    fn test_risk_summary_uses_current_time() {
        let before = Utc::now();
        let row = risk_summary_to_row(&RiskSummary::new("B", 70.0, 10, 50.0));
        let Some(CellValue::Text(stamp)) = row.get("Export Date") else {
            panic!("export date should be text");
        };
        let stamped = DateTime::parse_from_rfc3339(stamp).unwrap();
        assert!(stamped.timestamp_millis() >= before.timestamp_millis());
    }

    #[test]
    fn test_to_rows_preserves_order() {
        let projects = vec![Project::new("First", "Active"), Project::new("Second", "Review")];
        let rows = to_rows(&projects, &ExportOptions::default());
        assert_eq!(rows[0].get("Project Name"), Some(&CellValue::from("First")));
        assert_eq!(rows[1].get("Project Name"), Some(&CellValue::from("Second")));
    }
}
