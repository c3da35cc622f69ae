//! Dotted key paths into a document (e.g. `footer.privacy`).

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};

/// A parsed, non-empty dotted key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Every segment must be non-empty.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::field_path(raw, "path is empty"));
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if let Some(pos) = segments.iter().position(|s| s.is_empty()) {
            return Err(AppError::field_path(
                raw,
                format!("segment {} is empty", pos + 1),
            ));
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    /// Parse a list of dotted paths, failing on the first malformed one.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Self>> {
        raw.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments leading to the parent mapping.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Final key, looked up in the parent mapping.
    pub fn leaf(&self) -> &str {
        // parse() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }
}

impl FromStr for FieldPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
