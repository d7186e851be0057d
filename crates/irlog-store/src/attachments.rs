//! Attachment storage inside directory-form incidents.
//!
//! Attachments are copied verbatim next to the report document. No checksum
//! or dedup: a same-name copy overwrites the prior one.

use crate::{Error, Result};
use chrono::{DateTime, Local};
use irlog_core::incident_dir;
use irlog_types::IncidentId;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename timestamp for captured screenshots (second granularity)
const SCREENSHOT_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// In-memory raster image, already encoded as PNG bytes.
///
/// Capture itself (clipboard grab, raster encoding) happens in the embedding
/// UI; this layer only persists the encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    png: Vec<u8>,
}

impl CapturedImage {
    pub fn from_png(png: impl Into<Vec<u8>>) -> Self {
        Self { png: png.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }
}

/// Copy an external file into the incident's attachment area and return the
/// destination path.
///
/// The directory form is created on demand. Fails with [`Error::Io`] when the
/// source is unreadable or the destination directory cannot be created.
pub fn copy_into(root: &Path, id: &IncidentId, source: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        Error::InvalidOperation(format!(
            "attachment source has no file name: {}",
            source.display()
        ))
    })?;

    let dir = incident_dir(root, id);
    fs::create_dir_all(&dir)?;

    let dest = dir.join(name);
    fs::copy(source, &dest)?;

    log::debug!("copied {} to {}", source.display(), dest.display());

    Ok(dest)
}

/// Persist a captured image as `screenshot_<YYYYMMDD_HHMMSS>.png` inside the
/// incident's attachment area and return the destination path.
///
/// `image` is `None` when the capturing side had nothing to offer (empty
/// clipboard, or no imaging support in the runtime); that is reported as
/// [`Error::CaptureUnavailable`] rather than a generic I/O failure.
pub fn save_captured_image(
    root: &Path,
    id: &IncidentId,
    image: Option<&CapturedImage>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let image = image.ok_or(Error::CaptureUnavailable)?;

    let dir = incident_dir(root, id);
    fs::create_dir_all(&dir)?;

    let dest = dir.join(format!(
        "screenshot_{}.png",
        now.format(SCREENSHOT_TIME_FORMAT)
    ));
    fs::write(&dest, image.as_bytes())?;

    log::debug!("saved captured image to {}", dest.display());

    Ok(dest)
}
