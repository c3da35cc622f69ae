//! Language code validation.

use regex::Regex;

use crate::error::Result;

/// Primary tag of 2-3 lowercase letters, optional region/script subtag.
const LANGUAGE_CODE_PATTERN: &str = r"^[a-z]{2,3}(?:-[A-Za-z0-9]{2,4})?$";

/// Compiled matcher for language codes such as `en`, `pt-BR` or `zh-Hant`.
#[derive(Debug, Clone)]
pub struct LanguageCodes {
    pattern: Regex,
}

impl LanguageCodes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(LANGUAGE_CODE_PATTERN)?,
        })
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.pattern.is_match(code)
    }
}
