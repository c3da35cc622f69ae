// src/error.rs

//! Unified error handling for the propagator.

use std::fmt;

use thiserror::Error;

/// Result type alias for propagator operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Regex compilation failed
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A language document could not be read, parsed or written
    #[error("Document error for {lang}: {message}")]
    Document { lang: String, message: String },

    /// A dotted field path is malformed
    #[error("Invalid field path '{path}': {message}")]
    FieldPath { path: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a document error for a language.
    pub fn document(lang: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Document {
            lang: lang.into(),
            message: message.to_string(),
        }
    }

    /// Create a field path error.
    pub fn field_path(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::FieldPath {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
