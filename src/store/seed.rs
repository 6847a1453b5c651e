//! Mock dashboard data
//!
//! The records a fresh dashboard starts with. `DashboardStore::reset`
//! restores exactly this set.

use chrono::NaiveDate;

use crate::models::{Creator, DateValue, LegalIssue, Project, RecordId, RiskSummary};

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    description: &str,
    status: &str,
    assets: u32,
    compliance: f64,
    risk: &str,
    updated: &str,
    owner: &str,
    created: &str,
) -> Project {
    Project {
        id: Some(RecordId::from(id)),
        name: Some(name.into()),
        description: Some(description.into()),
        status: Some(status.into()),
        assets: Some(assets),
        compliance: Some(compliance),
        risk: Some(risk.into()),
        updated: Some(updated.into()),
        owner: Some(owner.into()),
        created_date: Some(created.into()),
    }
}

/// Seed projects
pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Summer Campaign 2024",
            "Seasonal brand campaign across social and print",
            "Active",
            156,
            94.0,
            "Low",
            "2 hours ago",
            "Sarah Johnson",
            "March 12, 2024",
        ),
        project(
            "2",
            "Product Launch Assets",
            "Hero imagery and video for the Q3 launch",
            "In Review",
            89,
            78.0,
            "Medium",
            "1 day ago",
            "Michael Chen",
            "April 3, 2024",
        ),
        project(
            "3",
            "Brand Guidelines Refresh",
            "Logo, typography and color system update",
            "Active",
            42,
            100.0,
            "Low",
            "3 days ago",
            "Emma Davis",
            "January 28, 2024",
        ),
        project(
            "4",
            "Partner Co-Marketing",
            "Shared assets licensed from partner agencies",
            "On Hold",
            213,
            61.0,
            "High",
            "1 week ago",
            "James Wilson",
            "May 19, 2024",
        ),
    ]
}

/// Seed legal issues. Status is left unset, as in the dashboard's data.
pub fn legal_issues() -> Vec<LegalIssue> {
    let issue = |id: u64, asset: &str, issue_type: &str, severity: &str, reported: &str| LegalIssue {
        id: Some(RecordId::from(id)),
        asset: Some(asset.into()),
        issue_type: Some(issue_type.into()),
        severity: Some(severity.into()),
        status: None,
        reported: Some(reported.into()),
    };

    vec![
        issue(1, "hero-banner.jpg", "Copyright Conflict", "High", "2 hours ago"),
        issue(2, "background-track.mp3", "License Expired", "Medium", "1 day ago"),
        issue(3, "team-photo.png", "Missing Model Release", "High", "3 days ago"),
        issue(4, "stock-city-skyline.jpg", "Attribution Missing", "Low", "1 week ago"),
    ]
}

/// Seed creators
pub fn creators() -> Vec<Creator> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).map(DateValue::Date);

    vec![
        Creator {
            id: Some(RecordId::from("c-1")),
            name: Some("Ava Martinez".into()),
            email: Some("ava.martinez@example.com".into()),
            cr_id: Some("CR-2024-0001".into()),
            creator_type: Some("Individual".into()),
            rights_status: Some("Active".into()),
            valid_from: date(2024, 1, 1),
            valid_through: date(2026, 12, 31),
            risk_level: Some("Low".into()),
            assets_count: Some(48),
            projects_count: Some(6),
            profile_completion: Some(100.0),
            registration_source: Some("Direct".into()),
            created_at: date(2024, 1, 1),
            updated_at: Some(DateValue::from("2024-06-15T09:30:00Z")),
        },
        Creator {
            id: Some(RecordId::from("c-2")),
            name: Some("Northlight Studios".into()),
            email: Some("rights@northlight.example".into()),
            cr_id: Some("CR-2024-0002".into()),
            creator_type: Some("Organization".into()),
            rights_status: Some("Pending".into()),
            valid_from: Some(DateValue::from("March 1, 2024")),
            valid_through: Some(DateValue::from("February 28, 2025")),
            risk_level: Some("Medium".into()),
            assets_count: Some(132),
            projects_count: Some(3),
            profile_completion: Some(72.5),
            registration_source: Some("Agency Import".into()),
            created_at: date(2024, 2, 20),
            updated_at: date(2024, 5, 2),
        },
        Creator {
            id: Some(RecordId::from("c-3")),
            name: Some("Liam O'Brien".into()),
            email: Some("liam@obrien.example".into()),
            cr_id: Some("CR-2023-0417".into()),
            creator_type: Some("Individual".into()),
            rights_status: Some("Expired".into()),
            valid_from: date(2023, 4, 1),
            valid_through: date(2024, 3, 31),
            risk_level: Some("High".into()),
            assets_count: Some(9),
            projects_count: Some(1),
            profile_completion: Some(40.0),
            registration_source: Some("Bulk Upload".into()),
            created_at: date(2023, 3, 28),
            updated_at: date(2024, 4, 2),
        },
    ]
}

/// Seed risk summary
pub fn risk_summary() -> RiskSummary {
    RiskSummary::new("A", 94.2, 2847, 87.0)
}
