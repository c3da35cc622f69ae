//! Section patch files.
//!
//! A patch file maps language codes to the top-level sections to write into
//! that language's document:
//!
//! ```json
//! {
//!   "nl": { "faq": { "questions": [ ... ] } },
//!   "de": { "faq": { "questions": [ ... ] } }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Per-language section payloads, in file order.
#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    entries: Map<String, Value>,
}

impl SectionPatch {
    /// Load a patch file. The root must be a JSON object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            AppError::config(format!("cannot read patch file {}: {e}", path.display()))
        })?;
        Self::from_slice(&bytes)
            .map_err(|e| AppError::config(format!("invalid patch file {}: {e}", path.display())))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let entries: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(Self { entries })
    }

    /// Languages and their raw payloads. A payload that is not an object is
    /// rejected per language by the patch run.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(lang, value)| (lang.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
