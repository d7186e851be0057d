//! Report document operations.
//!
//! `append_entry` is the hot path: one blind append per logged finding, never
//! reading prior content, so an append can never truncate what came before.
//! `insert_under_category` exists only to keep attachment references grouped
//! under their section; it pays for a full read, a line-level insert, and a
//! rewrite through a temp file renamed over the original. The rename keeps a
//! crash from leaving a torn document, but two writers racing on the same
//! incident can still lose one side's change between read and rename.

use crate::{Error, Result};
use chrono::Local;
use irlog_core::{incident_dir, report_path, resolve_report_path};
use irlog_types::{Category, Entry, IncidentId, format_section_header};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append one categorized entry to the incident's report.
///
/// The directory form is created on demand; a pre-existing standalone
/// `<id>.md` for the same id is never reused for writes. Every call writes a
/// fresh `## <Category>` header even when the category already appears
/// earlier in the document: the report is a chronological audit log, not a
/// map from category to a single section, so consumers must expect repeated
/// headers.
pub fn append_entry(
    root: &Path,
    id: &IncidentId,
    category: Category,
    actor: &str,
    text: &str,
) -> Result<Entry> {
    let text = validated_details(text)?;

    fs::create_dir_all(incident_dir(root, id))?;
    write_entry_block(&report_path(root, id), category, actor, text)
}

/// Append one categorized entry to an explicitly chosen document file.
///
/// Save-As variant of [`append_entry`]: same validation and block format,
/// but the destination is caller-chosen and independent of the storage root
/// layout. Parent directories are created on demand.
pub fn append_entry_to(
    document: &Path,
    category: Category,
    actor: &str,
    text: &str,
) -> Result<Entry> {
    let text = validated_details(text)?;

    if let Some(parent) = document.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    write_entry_block(document, category, actor, text)
}

/// Insert an attachment reference line under the first matching category
/// section of the incident's report.
///
/// The whole document is read (a missing file reads as empty), the line is
/// inserted immediately after the first `## <Category>` header, and the full
/// content is rewritten atomically. When no such header exists anywhere, a
/// blank line, a fresh header, and the line are appended at the end instead.
/// Earlier sections and the relative order of all other lines are preserved.
pub fn insert_under_category(
    root: &Path,
    id: &IncidentId,
    category: Category,
    line: &str,
) -> Result<()> {
    fs::create_dir_all(incident_dir(root, id))?;

    let document = report_path(root, id);
    let content = match fs::read_to_string(&document) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    let mut body = ReportBody::parse(&content);
    if !body.insert_under(category, line) {
        log::debug!(
            "no {} section in {}; appending a new one",
            category,
            document.display()
        );
    }

    replace_document(&document, &body.render())
}

/// Full content of the resolved document for `id`, or empty when no storage
/// location (or its document file) exists yet.
pub fn read_report(root: &Path, id: &IncidentId) -> Result<String> {
    let Some(path) = resolve_report_path(root, id) else {
        return Ok(String::new());
    };

    match fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        // Directory form may exist before its first entry is written
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

fn validated_details(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDetails);
    }
    Ok(trimmed)
}

fn write_entry_block(
    document: &Path,
    category: Category,
    actor: &str,
    text: &str,
) -> Result<Entry> {
    let entry = Entry::new(actor, text, Local::now());

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(document)?;
    file.write_all(format!("\n{}{}", format_section_header(category), entry.render()).as_bytes())?;

    log::debug!("appended {} entry to {}", category, document.display());

    Ok(entry)
}

/// Rewrite `document` in full via a same-directory temp file + rename
fn replace_document(document: &Path, content: &str) -> Result<()> {
    let tmp = document.with_extension("md.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, document)?;
    Ok(())
}

/// Line-oriented view of a report document.
///
/// Appends never go through this model; only operations that need structural
/// awareness of section headers (attachment-reference inserts) pay the parse
/// cost. Entry lines are opaque text and are never interpreted.
#[derive(Debug)]
struct ReportBody {
    lines: Vec<String>,
}

impl ReportBody {
    fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Insert `line` immediately after the first `## <category>` header.
    ///
    /// Returns false when the category has no section yet; in that case a
    /// blank line, the header, and `line` are appended at the end.
    fn insert_under(&mut self, category: Category, line: &str) -> bool {
        let header = format!("## {}", category);

        if let Some(pos) = self.lines.iter().position(|l| l.trim() == header) {
            self.lines.insert(pos + 1, line.to_string());
            return true;
        }

        self.lines.push(String::new());
        self.lines.push(header);
        self.lines.push(line.to_string());
        false
    }

    /// Render back to document text, normalized to one trailing newline
    fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_under_places_line_after_first_header() {
        let mut body = ReportBody::parse("\n## Execution\n- [t] a: one\n\n## Execution\n- [t] a: two\n");
        let found = body.insert_under(Category::Execution, "- [Attached File: x]");

        assert!(found);
        assert_eq!(
            body.render(),
            "\n## Execution\n- [Attached File: x]\n- [t] a: one\n\n## Execution\n- [t] a: two\n"
        );
    }

    #[test]
    fn insert_under_appends_block_when_header_missing() {
        let mut body = ReportBody::parse("\n## Execution\n- [t] a: one\n");
        let found = body.insert_under(Category::Persistence, "- [Attached File: x]");

        assert!(!found);
        assert_eq!(
            body.render(),
            "\n## Execution\n- [t] a: one\n\n## Persistence\n- [Attached File: x]\n"
        );
    }

    #[test]
    fn insert_under_empty_document_starts_fresh_block() {
        let mut body = ReportBody::parse("");
        body.insert_under(Category::Discovery, "- [Attached File: x]");

        assert_eq!(body.render(), "\n## Discovery\n- [Attached File: x]\n");
    }
}
