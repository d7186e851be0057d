use irlog_types::IncidentId;
use std::path::{Path, PathBuf};

/// Fixed name of the report document inside a directory-form incident
pub const REPORT_FILE: &str = "Event_Report.md";

/// Name prefix of directory-form incident folders
pub const INCIDENT_DIR_PREFIX: &str = "Incident_";

/// Directory-form storage location: `<root>/Incident_<id>`
pub fn incident_dir(root: &Path, id: &IncidentId) -> PathBuf {
    root.join(format!("{INCIDENT_DIR_PREFIX}{id}"))
}

/// Report document inside the directory form: `<root>/Incident_<id>/Event_Report.md`
pub fn report_path(root: &Path, id: &IncidentId) -> PathBuf {
    incident_dir(root, id).join(REPORT_FILE)
}

/// Standalone-form document: `<root>/<id>.md`
pub fn standalone_path(root: &Path, id: &IncidentId) -> PathBuf {
    root.join(format!("{id}.md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths() {
        let root = Path::new("/cases");
        let id = IncidentId::new("1001");

        assert_eq!(incident_dir(root, &id), Path::new("/cases/Incident_1001"));
        assert_eq!(
            report_path(root, &id),
            Path::new("/cases/Incident_1001/Event_Report.md")
        );
        assert_eq!(standalone_path(root, &id), Path::new("/cases/1001.md"));
    }
}
