//! CLI commands for looking at rows without exporting them

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::{format_row_count, format_rows_table};
use crate::error::{DeskError, DeskResult};
use crate::export::{parse_csv, risk_summary_to_row, to_rows, ExportRow};
use crate::store::DashboardStore;

use super::export::{collect_records, collect_risk_summary};

/// Record collections that can be previewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Projects,
    #[value(alias = "legal-issues")]
    Issues,
    Creators,
    Risk,
}

/// Project records to rows without serializing them
pub fn preview_rows(
    store: &DashboardStore,
    settings: &Settings,
    entity: EntityKind,
    input: Option<&Path>,
) -> DeskResult<Vec<ExportRow>> {
    let options = settings.export_options();

    Ok(match entity {
        EntityKind::Projects => to_rows(&collect_records(&store.projects, input)?, &options),
        EntityKind::Issues => to_rows(&collect_records(&store.issues, input)?, &options),
        EntityKind::Creators => to_rows(&collect_records(&store.creators, input)?, &options),
        EntityKind::Risk => vec![risk_summary_to_row(&collect_risk_summary(store, input)?)],
    })
}

/// Print projected rows as a table
pub fn handle_preview_command(
    store: &DashboardStore,
    settings: &Settings,
    entity: EntityKind,
    input: Option<PathBuf>,
) -> DeskResult<()> {
    let rows = preview_rows(store, settings, entity, input.as_deref())?;
    println!("{}", format_rows_table(&rows));
    println!("{}", format_row_count(rows.len()));
    Ok(())
}

/// Print an exported CSV file as a table
pub fn handle_inspect_command(file: PathBuf) -> DeskResult<()> {
    let text = std::fs::read_to_string(&file)
        .map_err(|e| DeskError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let rows = parse_csv(&text)?;
    println!("{}", format_rows_table(&rows));
    println!("{}", format_row_count(rows.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CellValue;

    #[test]
    fn test_preview_seeded_issues_keep_undefined_status() {
        let store = DashboardStore::seeded();
        let rows = preview_rows(&store, &Settings::default(), EntityKind::Issues, None).unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.get("Status") == Some(&CellValue::Undefined)));
    }

    #[test]
    fn test_preview_creators_format_dates() {
        let store = DashboardStore::seeded();
        let rows = preview_rows(&store, &Settings::default(), EntityKind::Creators, None).unwrap();

        assert_eq!(rows[0].get("Valid Through"), Some(&CellValue::from("12/31/2026")));
        assert_eq!(rows[1].get("Valid From"), Some(&CellValue::from("3/1/2024")));
    }

    #[test]
    fn test_preview_risk_is_single_row() {
        let store = DashboardStore::seeded();
        let rows = preview_rows(&store, &Settings::default(), EntityKind::Risk, None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Total Assets"), Some(&CellValue::Number(2847.0)));
    }
}
