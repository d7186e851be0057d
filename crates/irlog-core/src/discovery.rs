use crate::path::{incident_dir, report_path, standalone_path};
use irlog_types::IncidentId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

static DIR_FORM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Incident_(.+)$").unwrap());
static STANDALONE_FORM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)\.md$").unwrap());

/// Collect every incident identifier known under `root`.
///
/// Scans the immediate children only. A directory named `Incident_<id>` and a
/// standalone `<id>.md` file for the same id collapse to a single entry.
/// Numeric ids sort first by value; all other ids follow lexicographically
/// (the `IncidentId` total order). An unreadable or missing root yields an
/// empty list, never an error.
pub fn scan_incident_ids(root: &Path) -> Vec<IncidentId> {
    let mut ids = BTreeSet::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable child of {}: {}", root.display(), err);
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if entry.file_type().is_dir() {
            if let Some(caps) = DIR_FORM.captures(name) {
                ids.insert(IncidentId::new(&caps[1]));
            }
        } else if entry.file_type().is_file()
            && let Some(caps) = STANDALONE_FORM.captures(name)
        {
            ids.insert(IncidentId::new(&caps[1]));
        }
    }

    ids.into_iter().collect()
}

/// Resolve the readable document for `id`, if any.
///
/// The directory form shadows a standalone file of the same id: when
/// `Incident_<id>/` exists, its report path is returned even if `<id>.md`
/// is also present (and even before the first entry has been written).
pub fn resolve_report_path(root: &Path, id: &IncidentId) -> Option<PathBuf> {
    if incident_dir(root, id).is_dir() {
        return Some(report_path(root, id));
    }

    let standalone = standalone_path(root, id);
    if standalone.is_file() {
        return Some(standalone);
    }

    None
}
