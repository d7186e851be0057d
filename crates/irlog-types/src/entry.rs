use crate::Category;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timestamp format used in entry lines (minute granularity)
const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Single logged finding, rendered as `- [<timestamp>] <actor>: <text>`.
///
/// The actor is always supplied by the caller; the core never reads the
/// identity from ambient process state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub timestamp: DateTime<Local>,
    pub actor: String,
    pub text: String,
}

impl Entry {
    pub fn new(
        actor: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp,
            actor: actor.into(),
            text: text.into(),
        }
    }

    /// Render as a single report line, trailing newline included
    pub fn render(&self) -> String {
        format_entry(&self.actor, &self.text, self.timestamp)
    }
}

/// Render one entry line: `- [YYYY-MM-DD HH:MM] <actor>: <text>\n`
pub fn format_entry(actor: &str, text: &str, now: DateTime<Local>) -> String {
    format!("- [{}] {}: {}\n", now.format(ENTRY_TIME_FORMAT), actor, text)
}

/// Render a category section header: `## <Category>\n`
pub fn format_section_header(category: Category) -> String {
    format!("## {}\n", category)
}

/// Reference line for a copied attachment, inserted under its category section
pub fn format_file_reference(path: &Path) -> String {
    format!("- [Attached File: {}]", path.display())
}

/// Inline reference for a pasted image, injected into the pending entry body
/// before the entry is appended
pub fn format_image_reference(path: &Path) -> String {
    format!("[Attached Image: {}]", path.display())
}
