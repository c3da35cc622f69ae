//! In-memory storage for pipeline tests.
//!
//! Holds raw bytes per language so tests can plant malformed documents, and
//! can be told to fail writes for chosen languages.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::Document;
use crate::storage::{DocumentStorage, WriteMetadata};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<String, Vec<u8>>>,
    failing_writes: HashSet<String>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(self, lang: &str, raw: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(lang.to_string(), raw.as_bytes().to_vec());
        self
    }

    pub fn with_json(self, lang: &str, value: serde_json::Value) -> Self {
        let raw = serde_json::to_string(&value).unwrap();
        self.with_raw(lang, &raw)
    }

    pub fn failing_writes_for(mut self, lang: &str) -> Self {
        self.failing_writes.insert(lang.to_string());
        self
    }

    pub fn raw(&self, lang: &str) -> Option<String> {
        self.files
            .borrow()
            .get(lang)
            .map(|b| String::from_utf8(b.clone()).unwrap())
    }

    pub fn json(&self, lang: &str) -> Option<serde_json::Value> {
        self.raw(lang).map(|s| serde_json::from_str(&s).unwrap())
    }

    /// Languages written so far, in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self, lang: &str) -> Result<Option<Document>> {
        match self.files.borrow().get(lang) {
            Some(bytes) => Document::from_slice(bytes)
                .map(Some)
                .map_err(|e| AppError::document(lang, format!("malformed {lang}.json: {e}"))),
            None => Ok(None),
        }
    }

    fn save(&self, lang: &str, document: &Document) -> Result<WriteMetadata> {
        if self.failing_writes.contains(lang) {
            return Err(AppError::document(
                lang,
                format!("cannot write {lang}.json: permission denied"),
            ));
        }
        let bytes = document.to_pretty_vec()?;
        let len = bytes.len();
        self.files.borrow_mut().insert(lang.to_string(), bytes);
        self.writes.borrow_mut().push(lang.to_string());
        Ok(WriteMetadata {
            location: self.location(lang),
            bytes: len,
            timestamp: Utc::now(),
        })
    }

    fn exists(&self, lang: &str) -> bool {
        self.files.borrow().contains_key(lang)
    }

    fn location(&self, lang: &str) -> String {
        format!("memory://{lang}.json")
    }
}
