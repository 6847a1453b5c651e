use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn assetdesk(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("assetdesk").unwrap();
    cmd.env("ASSETDESK_DATA_DIR", base).env_remove("RUST_LOG");
    cmd
}

#[test]
fn export_seeded_projects_to_csv() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    assetdesk(temp_dir.path())
        .args(["export", "projects", "--format", "csv", "--filename", "projects"])
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 projects"));

    let csv = fs::read_to_string(out.join("projects.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Project Name,Description,Status,Assets,Compliance,Risk Level,Last Updated,Owner,Created")
    );
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("94%"));
}

#[test]
fn export_issues_from_file_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input-issues.json");
    fs::write(
        &input,
        r#"[{"id":1,"asset":"test-image.jpg","type":"Copyright Conflict","severity":"High","reported":"2 hours ago"}]"#,
    )
    .unwrap();

    assetdesk(temp_dir.path())
        .args(["export", "issues", "-f", "json", "-n", "issues"])
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    let json = fs::read_to_string(temp_dir.path().join("issues.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["Asset"], "test-image.jpg");
    assert_eq!(value[0]["Issue Type"], "Copyright Conflict");
    assert!(value[0].get("Status").is_none());
}

#[test]
fn empty_csv_export_reports_no_data() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("none.json");
    fs::write(&input, "[]").unwrap();

    assetdesk(temp_dir.path())
        .args(["export", "creators", "-f", "csv", "-n", "creators"])
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data to export"));

    assert!(!temp_dir.path().join("creators.csv").exists());
}

#[test]
fn empty_json_export_is_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("none.json");
    fs::write(&input, "[]").unwrap();

    assetdesk(temp_dir.path())
        .args(["export", "projects", "-f", "json", "-n", "empty"])
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp_dir.path().join("empty.json")).unwrap(), "[]");
}

#[test]
fn inspect_reads_exported_csv() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("people.csv");
    fs::write(&file, "Name,Note\n\"Smith, Jane\",\"said \"\"hi\"\"\"").unwrap();

    assetdesk(temp_dir.path())
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith, Jane"))
        .stdout(predicate::str::contains("said \"hi\""))
        .stdout(predicate::str::contains("1 row"));
}

#[test]
fn preview_risk_summary() {
    let temp_dir = TempDir::new().unwrap();

    assetdesk(temp_dir.path())
        .args(["preview", "risk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Provenance Score"))
        .stdout(predicate::str::contains("94.2"))
        .stdout(predicate::str::contains("87%"));
}

#[test]
fn init_then_config_shows_settings() {
    let temp_dir = TempDir::new().unwrap();

    assetdesk(temp_dir.path()).arg("init").assert().success();
    assert!(temp_dir.path().join("config.json").exists());

    assetdesk(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default format: csv"))
        .stdout(predicate::str::contains("Initialized:    true"));
}
