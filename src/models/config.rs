//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{FieldPath, LanguageCodes};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the language documents live
    #[serde(default)]
    pub paths: PathsConfig,

    /// Canonical language and propagation targets
    #[serde(default)]
    pub languages: LanguagesConfig,

    /// Propagation rules
    #[serde(default)]
    pub propagation: PropagationConfig,

    /// Diagnostic logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            AppError::config(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Load configuration, or return defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}. Using defaults.", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Directory holding `<lang>.json` documents.
    pub fn base_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.base_dir)
    }

    /// Parsed preserved field paths.
    pub fn preserved_paths(&self) -> Result<Vec<FieldPath>> {
        FieldPath::parse_all(&self.propagation.preserved_fields)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.paths.base_dir.trim().is_empty() {
            return Err(AppError::validation("paths.base_dir is empty"));
        }

        let codes = LanguageCodes::new()?;
        let canonical = &self.languages.canonical;
        if !codes.is_valid(canonical) {
            return Err(AppError::validation(format!(
                "languages.canonical '{canonical}' is not a valid language code"
            )));
        }

        let mut seen = HashSet::new();
        for lang in &self.languages.targets {
            if !codes.is_valid(lang) {
                return Err(AppError::validation(format!(
                    "languages.targets entry '{lang}' is not a valid language code"
                )));
            }
            if !seen.insert(lang.as_str()) {
                return Err(AppError::validation(format!(
                    "languages.targets lists '{lang}' more than once"
                )));
            }
        }

        self.preserved_paths()?;
        Ok(())
    }
}

/// Filesystem locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base directory containing `<lang>.json` files
    #[serde(default = "defaults::base_dir")]
    pub base_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: defaults::base_dir(),
        }
    }
}

/// Language selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// Source-of-truth language whose document shape is authoritative
    #[serde(default = "defaults::canonical")]
    pub canonical: String,

    /// Languages brought into alignment, processed in this order
    #[serde(default = "defaults::targets")]
    pub targets: Vec<String>,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            canonical: defaults::canonical(),
            targets: defaults::targets(),
        }
    }
}

/// Propagation rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropagationConfig {
    /// Dotted paths whose existing target values survive propagation
    #[serde(default = "defaults::preserved_fields")]
    pub preserved_fields: Vec<String>,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            preserved_fields: defaults::preserved_fields(),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `log` filter when neither `RUST_LOG` nor `--verbose` is set
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn base_dir() -> String {
        "src/translations/landing".into()
    }

    pub fn canonical() -> String {
        "en".into()
    }

    pub fn targets() -> Vec<String> {
        ["nl", "de", "fr", "fi", "pl", "da", "hu", "sv", "no"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn preserved_fields() -> Vec<String> {
        vec!["footer.privacy".into(), "footer.terms".into()]
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [languages]
            targets = ["fr", "de"]
            "#,
        )
        .unwrap();

        assert_eq!(config.languages.canonical, "en");
        assert_eq!(config.languages.targets, ["fr", "de"]);
        assert_eq!(
            config.propagation.preserved_fields,
            ["footer.privacy", "footer.terms"]
        );
        assert_eq!(config.paths.base_dir, "src/translations/landing");
    }

    #[test]
    fn validate_rejects_empty_base_dir() {
        let mut config = Config::default();
        config.paths.base_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_language_codes() {
        let mut config = Config::default();
        config.languages.targets.push("../etc/passwd".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.languages.canonical = "English".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_targets() {
        let mut config = Config::default();
        config.languages.targets = vec!["fr".into(), "de".into(), "fr".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn validate_rejects_malformed_preserved_field() {
        let mut config = Config::default();
        config.propagation.preserved_fields.push("footer..terms".into());
        assert!(matches!(
            config.validate(),
            Err(AppError::FieldPath { .. })
        ));
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config.languages.canonical, "en");
    }

    #[test]
    fn load_or_default_rejects_malformed_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[paths\nbase_dir = \"elsewhere\"\n").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }
}
