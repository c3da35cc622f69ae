//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! └── {lang}.json    # Pretty-printed, 2-space indent, UTF-8
//! ```
//!
//! Writes go to `{lang}.json.tmp` first and are renamed over the target, so
//! a failed write leaves the previous document intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::Document;
use crate::storage::{DocumentStorage, WriteMetadata};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a language document.
    fn path(&self, lang: &str) -> PathBuf {
        self.root_dir.join(format!("{lang}.json"))
    }

    /// Ensure parent directory exists.
    fn ensure_dir(path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        Self::ensure_dir(path)?;

        let tmp = path.with_extension("json.tmp");
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(bytes)?;
            file.flush()
        });

        if let Err(e) = written.and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }

    /// Read bytes, returning None if file doesn't exist.
    fn read_bytes(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl DocumentStorage for LocalStorage {
    fn load(&self, lang: &str) -> Result<Option<Document>> {
        let path = self.path(lang);
        let bytes = Self::read_bytes(&path).map_err(|e| {
            AppError::document(lang, format!("cannot read {}: {e}", path.display()))
        })?;

        match bytes {
            Some(bytes) => {
                let document = Document::from_slice(&bytes).map_err(|e| {
                    AppError::document(lang, format!("malformed {}: {e}", path.display()))
                })?;
                log::debug!("Loaded {} ({} top-level keys)", path.display(), document.len());
                Ok(Some(document))
            }
            None => {
                log::debug!("No document at {}", path.display());
                Ok(None)
            }
        }
    }

    fn save(&self, lang: &str, document: &Document) -> Result<WriteMetadata> {
        let path = self.path(lang);
        let bytes = document.to_pretty_vec()?;

        Self::write_bytes(&path, &bytes).map_err(|e| {
            AppError::document(lang, format!("cannot write {}: {e}", path.display()))
        })?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(WriteMetadata {
            location: path.display().to_string(),
            bytes: bytes.len(),
            timestamp: Utc::now(),
        })
    }

    fn exists(&self, lang: &str) -> bool {
        self.path(lang).is_file()
    }

    fn location(&self, lang: &str) -> String {
        self.path(lang).display().to_string()
    }
}
