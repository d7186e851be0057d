//! Persistence layer for incident report documents and attachments.
//!
//! Reports live directly on the filesystem: one `Incident_<id>/` folder per
//! incident holding an `Event_Report.md` document and its attachments. The
//! source directories are the single source of truth; nothing is indexed or
//! cached. Entries accumulate monotonically for the lifetime of an incident;
//! this layer never deletes or compacts a report.
//!
//! A single interactive operator per incident is assumed. `append_entry` is
//! safe to interleave as far as the filesystem guarantees atomic append at
//! EOF; `insert_under_category` is a read-modify-write and can lose a
//! concurrent writer's update (see the module docs in [`document`]).

pub mod attachments;
pub mod config;
pub mod document;
mod error;

pub use attachments::{CapturedImage, copy_into, save_captured_image};
pub use config::{Config, resolve_storage_root};
pub use document::{append_entry, append_entry_to, insert_under_category, read_report};
pub use error::{Error, Result};
