//! # Capture Writer
//!
//! Writes clipboard content into a new, dated file. Existing files are never
//! overwritten.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::{
    clipboard::Clipboard,
    constants::{CAPTURE_FILE_EXTENSION, DATE_STAMP_FORMAT, MAX_DESCRIPTION_LENGTH},
    error::CaptureError,
    text::{normalize, sanitize_filename, strip_emoji},
};

/// Builds capture filenames for a fixed date and writes capture files.
#[derive(Debug, Clone, Copy)]
pub struct FileWriter {
    date: NaiveDate,
}

impl FileWriter {
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Writer stamped with the local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Returns `<YYYYMMDD>-<description>.txt`.
    pub fn filename(&self, description: &str) -> Result<String, CaptureError> {
        let truncated: String = description.chars().take(MAX_DESCRIPTION_LENGTH).collect();
        let slug = normalize(&truncated);
        if slug.is_empty() {
            return Err(CaptureError::EmptyDescription(description.to_string()));
        }

        let stamp = self.date.format(DATE_STAMP_FORMAT);
        Ok(sanitize_filename(&format!(
            "{stamp}-{slug}.{CAPTURE_FILE_EXTENSION}"
        )))
    }

    /// Writes `content` into a new file in `dir` and clears the clipboard.
    ///
    /// Fails with `EmptyClipboard` before touching the filesystem when there is
    /// nothing to write, and with `Collision` when the target already exists.
    pub fn write(
        &self,
        dir: &Path,
        description: &str,
        content: &str,
        clipboard: &mut dyn Clipboard,
    ) -> Result<PathBuf> {
        let content = strip_emoji(content);
        if content.is_empty() {
            return Err(CaptureError::EmptyClipboard.into());
        }

        let path = dir.join(self.filename(description)?);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(CaptureError::Collision(path).into());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create file: {}", path.display()));
            }
        };

        let written = file
            .write_all(content.as_bytes())
            .and_then(|()| file.sync_all());
        if let Err(err) = written {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path) {
                warn!(path = %path.display(), "could not remove partial file: {cleanup}");
            }
            return Err(err).with_context(|| format!("Failed to write file: {}", path.display()));
        }
        debug!(path = %path.display(), bytes = content.len(), "capture written");

        if let Err(err) = clipboard.clear() {
            warn!("clipboard not cleared: {err:#}");
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use tempfile::tempdir;

    fn writer() -> FileWriter {
        FileWriter::new(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())
    }

    #[test]
    fn test_filename_format() {
        assert_eq!(
            writer().filename("My  Trip--to   Paris.").unwrap(),
            "20250307-my-trip-to-paris.txt"
        );
    }

    #[test]
    fn test_filename_truncates_description() {
        let long = "word ".repeat(40);
        let name = writer().filename(&long).unwrap();
        let slug = name
            .strip_prefix("20250307-")
            .and_then(|s| s.strip_suffix(".txt"))
            .unwrap();
        assert!(slug.chars().count() <= MAX_DESCRIPTION_LENGTH);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_filename_rejects_punctuation_only() {
        assert!(matches!(
            writer().filename("?!..."),
            Err(CaptureError::EmptyDescription(_))
        ));
    }

    #[test]
    fn test_write_creates_file_and_clears_clipboard() {
        let temp = tempdir().unwrap();
        let mut clipboard = MemoryClipboard::with_text("unused");

        let path = writer()
            .write(temp.path(), "meeting notes", "line 1\nline 2\n", &mut clipboard)
            .unwrap();

        assert_eq!(path, temp.path().join("20250307-meeting-notes.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "line 1\nline 2\n");
        assert_eq!(clipboard.content(), "");
    }

    #[test]
    fn test_write_strips_emoji() {
        let temp = tempdir().unwrap();
        let mut clipboard = MemoryClipboard::default();

        let path = writer()
            .write(temp.path(), "launch", "liftoff 🚀!", &mut clipboard)
            .unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "liftoff !");
    }

    #[test]
    fn test_collision_keeps_existing_content() {
        let temp = tempdir().unwrap();
        let existing = temp.path().join("20250307-notes.txt");
        fs::write(&existing, "original").unwrap();
        let mut clipboard = MemoryClipboard::with_text("new text");

        let err = writer()
            .write(temp.path(), "notes", "new text", &mut clipboard)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CaptureError>(),
            Some(CaptureError::Collision(_))
        ));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "original");
        assert_eq!(clipboard.content(), "new text");
    }

    #[test]
    fn test_empty_content_creates_nothing() {
        let temp = tempdir().unwrap();
        let mut clipboard = MemoryClipboard::default();

        let err = writer()
            .write(temp.path(), "notes", "", &mut clipboard)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CaptureError>(),
            Some(CaptureError::EmptyClipboard)
        ));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_emoji_only_content_is_empty() {
        let temp = tempdir().unwrap();
        let mut clipboard = MemoryClipboard::with_text("🎉");

        let err = writer()
            .write(temp.path(), "party", "🎉", &mut clipboard)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CaptureError>(),
            Some(CaptureError::EmptyClipboard)
        ));
        assert_eq!(clipboard.content(), "🎉");
    }
}
