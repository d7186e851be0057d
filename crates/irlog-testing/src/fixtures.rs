//! Storage-root fixtures for test setup.

use anyhow::Result;
use irlog_core::{incident_dir, report_path, standalone_path};
use irlog_types::IncidentId;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated storage root backed by a temp directory.
///
/// # Example
/// ```no_run
/// use irlog_testing::TestRoot;
///
/// let root = TestRoot::new()
///     .with_incident("1001", "\n## Execution\n- [2026-08-06 14:30] alice: example\n")
///     .with_standalone("7", "legacy notes\n");
///
/// assert!(root.path().join("Incident_1001").is_dir());
/// ```
pub struct TestRoot {
    temp_dir: TempDir,
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoot {
    /// Create a new empty storage root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the storage root path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Seed a directory-form incident with the given report content.
    pub fn with_incident(self, id: &str, report: &str) -> Self {
        let id = IncidentId::new(id);
        fs::create_dir_all(incident_dir(self.path(), &id)).expect("Failed to create incident dir");
        fs::write(report_path(self.path(), &id), report).expect("Failed to write report");
        self
    }

    /// Seed a directory-form incident folder with no report document yet.
    pub fn with_empty_incident(self, id: &str) -> Self {
        let id = IncidentId::new(id);
        fs::create_dir_all(incident_dir(self.path(), &id)).expect("Failed to create incident dir");
        self
    }

    /// Seed a standalone-form document.
    pub fn with_standalone(self, id: &str, content: &str) -> Self {
        let id = IncidentId::new(id);
        fs::write(standalone_path(self.path(), &id), content).expect("Failed to write standalone");
        self
    }

    /// Report document path for a directory-form incident.
    pub fn report_path(&self, id: &str) -> PathBuf {
        report_path(self.path(), &IncidentId::new(id))
    }

    /// Read the directory-form report document for `id`.
    pub fn read_report_file(&self, id: &str) -> Result<String> {
        Ok(fs::read_to_string(self.report_path(id))?)
    }
}
