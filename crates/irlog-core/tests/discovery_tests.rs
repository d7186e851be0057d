use irlog_core::{report_path, resolve_report_path, scan_incident_ids, standalone_path};
use irlog_types::IncidentId;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn ids(root: &Path) -> Vec<String> {
    scan_incident_ids(root)
        .into_iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

#[test]
fn test_scan_missing_root_yields_empty() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    assert!(scan_incident_ids(&missing).is_empty());
}

#[test]
fn test_scan_collects_union_of_both_forms() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Directory form only
    fs::create_dir(root.join("Incident_1001")).unwrap();
    // Standalone form only
    fs::write(root.join("42.md"), "notes\n").unwrap();
    // Both forms for the same id must collapse to one entry
    fs::create_dir(root.join("Incident_7")).unwrap();
    fs::write(root.join("7.md"), "older notes\n").unwrap();
    // Non-matching clutter is ignored
    fs::write(root.join("scratch.txt"), "ignore me\n").unwrap();
    fs::create_dir(root.join("evidence")).unwrap();

    assert_eq!(ids(root), ["7", "42", "1001"]);
}

#[test]
fn test_scan_orders_numeric_before_text() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("Incident_alpha")).unwrap();
    fs::create_dir(root.join("Incident_9")).unwrap();
    fs::write(root.join("10.md"), "").unwrap();
    fs::write(root.join("1001.md"), "").unwrap();
    fs::create_dir(root.join("Incident_beta")).unwrap();

    assert_eq!(ids(root), ["9", "10", "1001", "alpha", "beta"]);
}

#[test]
fn test_scan_does_not_recurse_into_incidents() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("Incident_1001")).unwrap();
    // The report file inside the folder must not register as a standalone id
    fs::write(root.join("Incident_1001/Event_Report.md"), "\n## Execution\n").unwrap();

    assert_eq!(ids(root), ["1001"]);
}

#[test]
fn test_resolve_prefers_directory_form() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let id = IncidentId::new("1001");

    fs::create_dir(root.join("Incident_1001")).unwrap();
    fs::write(root.join("1001.md"), "standalone\n").unwrap();

    assert_eq!(resolve_report_path(root, &id), Some(report_path(root, &id)));
}

#[test]
fn test_resolve_falls_back_to_standalone() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let id = IncidentId::new("1001");

    fs::write(root.join("1001.md"), "standalone\n").unwrap();

    assert_eq!(
        resolve_report_path(root, &id),
        Some(standalone_path(root, &id))
    );
}

#[test]
fn test_resolve_unknown_id_is_absent() {
    let temp_dir = TempDir::new().unwrap();

    assert_eq!(
        resolve_report_path(temp_dir.path(), &IncidentId::new("9999")),
        None
    );
}
