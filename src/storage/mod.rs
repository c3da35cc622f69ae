//! Storage abstractions for language documents.
//!
//! One document per language code:
//!
//! ```text
//! {base_dir}/
//! ├── en.json     # Canonical document
//! ├── nl.json     # Target documents
//! └── de.json
//! ```

pub mod local;
#[cfg(test)]
pub mod memory;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Document;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a document write.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Where the document was written
    pub location: String,
    /// Serialized size in bytes
    pub bytes: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Options controlling how batch runs persist documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Compute outcomes without writing anything
    pub dry_run: bool,
    /// Patch runs only: create documents for languages with no file yet
    pub create_missing: bool,
}

impl WriteOptions {
    /// Write results, never create files a patch did not find.
    pub fn safe() -> Self {
        Self::default()
    }

    /// Report only.
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }
}

/// Trait for document storage backends.
pub trait DocumentStorage {
    /// Load a language document.
    ///
    /// Returns `Ok(None)` when no document exists for the language, and an
    /// error when one exists but cannot be read or parsed.
    fn load(&self, lang: &str) -> Result<Option<Document>>;

    /// Overwrite a language document.
    fn save(&self, lang: &str, document: &Document) -> Result<WriteMetadata>;

    /// Whether a document exists for the language.
    fn exists(&self, lang: &str) -> bool;

    /// Human-readable location of a language document.
    fn location(&self, lang: &str) -> String;
}
