pub mod discovery;
pub mod path;

pub use discovery::{resolve_report_path, scan_incident_ids};
pub use path::*;
