// src/models/mod.rs

//! Domain models for the propagator.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod document;
mod field_path;
mod language;
mod locale;
mod patch;
mod report;

// Re-export all public types
pub use config::{Config, LanguagesConfig, LoggingConfig, PathsConfig, PropagationConfig};
pub use document::Document;
pub use field_path::FieldPath;
pub use language::LanguageCodes;
pub use locale::{LocaleConfig, MessageLocale};
pub use patch::SectionPatch;
pub use report::{LanguageOutcome, LanguageStatus, PropagationReport};
