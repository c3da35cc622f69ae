//! Console message templates.
//!
//! Templates use `{lang}`, `{path}`, `{error}`, `{count}` and `{value}`
//! placeholders and can be overridden from a `locale.toml` file. Any message
//! missing from the file keeps its built-in English default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root locale configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default)]
    pub messages: MessageLocale,
}

impl LocaleConfig {
    /// Load locale configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load locale configuration with fallback to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Locale load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }
}

/// User-facing status messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLocale {
    #[serde(default = "defaults::propagate_starting")]
    pub propagate_starting: String,
    #[serde(default = "defaults::patch_starting")]
    pub patch_starting: String,
    #[serde(default = "defaults::dry_run_notice")]
    pub dry_run_notice: String,
    #[serde(default = "defaults::canonical_loaded")]
    pub canonical_loaded: String,
    #[serde(default = "defaults::canonical_in_targets")]
    pub canonical_in_targets: String,
    #[serde(default = "defaults::language_created")]
    pub language_created: String,
    #[serde(default = "defaults::language_updated")]
    pub language_updated: String,
    #[serde(default = "defaults::language_unchanged")]
    pub language_unchanged: String,
    #[serde(default = "defaults::language_not_found")]
    pub language_not_found: String,
    #[serde(default = "defaults::language_failed")]
    pub language_failed: String,
    #[serde(default = "defaults::batch_complete")]
    pub batch_complete: String,
    #[serde(default = "defaults::validate_starting")]
    pub validate_starting: String,
    #[serde(default = "defaults::validate_success")]
    pub validate_success: String,
    #[serde(default = "defaults::validate_failed")]
    pub validate_failed: String,
    #[serde(default = "defaults::validate_base_dir")]
    pub validate_base_dir: String,
    #[serde(default = "defaults::validate_canonical")]
    pub validate_canonical: String,
    #[serde(default = "defaults::validate_targets")]
    pub validate_targets: String,
    #[serde(default = "defaults::validate_preserved")]
    pub validate_preserved: String,
    #[serde(default = "defaults::info_header")]
    pub info_header: String,
    #[serde(default = "defaults::info_present")]
    pub info_present: String,
    #[serde(default = "defaults::info_missing")]
    pub info_missing: String,
}

impl Default for MessageLocale {
    fn default() -> Self {
        Self {
            propagate_starting: defaults::propagate_starting(),
            patch_starting: defaults::patch_starting(),
            dry_run_notice: defaults::dry_run_notice(),
            canonical_loaded: defaults::canonical_loaded(),
            canonical_in_targets: defaults::canonical_in_targets(),
            language_created: defaults::language_created(),
            language_updated: defaults::language_updated(),
            language_unchanged: defaults::language_unchanged(),
            language_not_found: defaults::language_not_found(),
            language_failed: defaults::language_failed(),
            batch_complete: defaults::batch_complete(),
            validate_starting: defaults::validate_starting(),
            validate_success: defaults::validate_success(),
            validate_failed: defaults::validate_failed(),
            validate_base_dir: defaults::validate_base_dir(),
            validate_canonical: defaults::validate_canonical(),
            validate_targets: defaults::validate_targets(),
            validate_preserved: defaults::validate_preserved(),
            info_header: defaults::info_header(),
            info_present: defaults::info_present(),
            info_missing: defaults::info_missing(),
        }
    }
}

mod defaults {
    pub fn propagate_starting() -> String {
        "Propagating canonical structure".into()
    }
    pub fn patch_starting() -> String {
        "Patching sections from {path}".into()
    }
    pub fn dry_run_notice() -> String {
        "Dry run: no files will be written".into()
    }
    pub fn canonical_loaded() -> String {
        "Canonical document '{lang}' loaded from {path} ({count} top-level keys)".into()
    }
    pub fn canonical_in_targets() -> String {
        "'{lang}' is the canonical language, skipping it as a target".into()
    }
    pub fn language_created() -> String {
        "Created {lang}.json".into()
    }
    pub fn language_updated() -> String {
        "Updated {lang}.json".into()
    }
    pub fn language_unchanged() -> String {
        "{lang}.json already in sync".into()
    }
    pub fn language_not_found() -> String {
        "File not found: {lang}.json".into()
    }
    pub fn language_failed() -> String {
        "Error updating {lang}: {error}".into()
    }
    pub fn batch_complete() -> String {
        "Batch complete".into()
    }
    pub fn validate_starting() -> String {
        "Validating configuration".into()
    }
    pub fn validate_success() -> String {
        "Configuration OK".into()
    }
    pub fn validate_failed() -> String {
        "Configuration invalid: {error}".into()
    }
    pub fn validate_base_dir() -> String {
        "Base directory: {value}".into()
    }
    pub fn validate_canonical() -> String {
        "Canonical language: {value}".into()
    }
    pub fn validate_targets() -> String {
        "Target languages ({count}): {value}".into()
    }
    pub fn validate_preserved() -> String {
        "Preserved fields ({count}): {value}".into()
    }
    pub fn info_header() -> String {
        "Translation documents in {path}".into()
    }
    pub fn info_present() -> String {
        "{lang}: {path}".into()
    }
    pub fn info_missing() -> String {
        "{lang}: missing ({path})".into()
    }
}
