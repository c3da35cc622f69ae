// src/pipeline/patch.rs

//! Section patching.
//!
//! Writes whole top-level sections (e.g. `faq`) from a patch file into each
//! language's document. Languages without a document are skipped unless
//! creation is requested.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::models::{
    Document, LanguageCodes, LanguageOutcome, LanguageStatus, LocaleConfig, PropagationReport,
    SectionPatch,
};
use crate::storage::{DocumentStorage, WriteOptions};
use crate::utils::console;

use super::propagate::report_outcome;

/// Set every section of `sections` on a copy of `document`.
///
/// Existing sections are replaced wholesale and keep their position; new
/// sections are appended.
pub fn patch_sections(document: &Document, sections: &Document) -> Document {
    let mut result = document.clone();
    for (key, value) in sections.as_map() {
        result.set_section(key.clone(), value.clone());
    }
    result
}

/// Apply a patch file to every language it names, in file order.
pub fn run_patch(
    locale: &LocaleConfig,
    storage: &dyn DocumentStorage,
    patch_path: &Path,
    options: &WriteOptions,
) -> Result<PropagationReport> {
    let messages = &locale.messages;
    console::header(&console::render(
        &messages.patch_starting,
        &[("path", patch_path.display().to_string().as_str())],
    ));
    if options.dry_run {
        console::warn(&messages.dry_run_notice);
    }

    let patch = SectionPatch::load(patch_path)?;
    apply_patch(locale, storage, &patch, options)
}

/// Apply an already loaded patch.
pub fn apply_patch(
    locale: &LocaleConfig,
    storage: &dyn DocumentStorage,
    patch: &SectionPatch,
    options: &WriteOptions,
) -> Result<PropagationReport> {
    let codes = LanguageCodes::new()?;
    let mut report = PropagationReport::new(options.dry_run);
    log::debug!("Patch names {} language(s)", patch.len());

    for (lang, payload) in patch.languages() {
        let outcome = patch_language(lang, payload, &codes, storage, options);
        report_outcome(locale, &outcome);
        report.push(outcome);
    }

    report.finish();
    console::summary(&locale.messages.batch_complete, &report.summary_items());

    Ok(report)
}

fn patch_language(
    lang: &str,
    payload: &Value,
    codes: &LanguageCodes,
    storage: &dyn DocumentStorage,
    options: &WriteOptions,
) -> LanguageOutcome {
    // Checked before the code is turned into a file path.
    if !codes.is_valid(lang) {
        return LanguageOutcome::failed(
            lang,
            "",
            format!("'{lang}' is not a valid language code"),
        );
    }

    let location = storage.location(lang);

    let Ok(sections) = Document::try_from(payload.clone()) else {
        return LanguageOutcome::failed(lang, location, "patch payload is not a JSON object");
    };

    let existing = match storage.load(lang) {
        Ok(existing) => existing,
        Err(e) => return LanguageOutcome::failed(lang, location, e),
    };

    let (updated, status) = match existing {
        Some(previous) => {
            let updated = patch_sections(&previous, &sections);
            let status = if previous.is_identical_to(&updated) {
                LanguageStatus::Unchanged
            } else {
                LanguageStatus::Updated
            };
            (updated, status)
        }
        None if options.create_missing => (sections, LanguageStatus::Created),
        None => return LanguageOutcome::new(lang, location, LanguageStatus::NotFound),
    };

    if !options.dry_run {
        match storage.save(lang, &updated) {
            Ok(written) => log::debug!(
                "{lang}: patched {} bytes to {} at {}",
                written.bytes,
                written.location,
                written.timestamp.to_rfc3339()
            ),
            Err(e) => return LanguageOutcome::failed(lang, location, e),
        }
    }

    LanguageOutcome::new(lang, location, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use serde_json::json;

    fn faq_patch() -> SectionPatch {
        SectionPatch::from_slice(
            json!({
                "nl": {"faq": {"questions": [{"question": "Welke diensten?", "answer": "Begeleiding."}]}},
                "de": {"faq": {"questions": [{"question": "Welche Dienste?", "answer": "Beratung."}]}},
                "fr": {"faq": {"questions": []}}
            })
            .to_string()
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn patch_sections_replaces_and_appends() {
        let document =
            Document::try_from(json!({"faq": "old", "footer": {"terms": "T"}})).unwrap();
        let sections =
            Document::try_from(json!({"faq": {"questions": []}, "header": {"cta": "Talk"}}))
                .unwrap();

        let result = patch_sections(&document, &sections);
        let keys: Vec<&String> = result.as_map().keys().collect();
        assert_eq!(keys, ["faq", "footer", "header"]);
        assert_eq!(result.as_map()["faq"], json!({"questions": []}));
        assert_eq!(result.as_map()["footer"], json!({"terms": "T"}));
    }

    #[test]
    fn skips_missing_documents_by_default() {
        let storage = MemoryStorage::new()
            .with_json("nl", json!({"hero": {"headline": "Eerst duidelijkheid"}}))
            .with_json("fr", json!({"faq": {"questions": [{"question": "?"}]}}));

        let report = apply_patch(
            &LocaleConfig::default(),
            &storage,
            &faq_patch(),
            &WriteOptions::safe(),
        )
        .unwrap();

        assert_eq!(report.outcome("nl").unwrap().status, LanguageStatus::Updated);
        assert_eq!(report.outcome("de").unwrap().status, LanguageStatus::NotFound);
        assert_eq!(report.outcome("fr").unwrap().status, LanguageStatus::Updated);
        assert!(!storage.exists("de"));

        let nl = storage.json("nl").unwrap();
        assert_eq!(nl["hero"]["headline"], "Eerst duidelijkheid");
        assert_eq!(nl["faq"]["questions"][0]["answer"], "Begeleiding.");
        assert_eq!(storage.json("fr").unwrap()["faq"]["questions"], json!([]));
    }

    #[test]
    fn creates_missing_documents_when_asked() {
        let storage = MemoryStorage::new();
        let options = WriteOptions {
            create_missing: true,
            ..WriteOptions::default()
        };

        let report =
            apply_patch(&LocaleConfig::default(), &storage, &faq_patch(), &options).unwrap();

        assert_eq!(report.count(&LanguageStatus::Created), 3);
        assert_eq!(storage.writes(), ["nl", "de", "fr"]);
    }

    #[test]
    fn failures_are_isolated_per_language() {
        let patch = SectionPatch::from_slice(
            br#"{"../en": {"faq": {}}, "sv": "not an object", "da": {"faq": {}}, "hu": {"faq": {}}}"#,
        )
        .unwrap();
        let storage = MemoryStorage::new()
            .with_raw("da", "{broken")
            .with_json("hu", json!({}))
            .failing_writes_for("hu");

        let report =
            apply_patch(&LocaleConfig::default(), &storage, &patch, &WriteOptions::safe()).unwrap();

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.failure_count(), 4);
        assert_eq!(storage.raw("da").unwrap(), "{broken");
        assert!(storage.writes().is_empty());
    }

    #[test]
    fn run_patch_fails_on_unreadable_patch_file() {
        let storage = MemoryStorage::new();
        let result = run_patch(
            &LocaleConfig::default(),
            &storage,
            Path::new("no/such/patch.json"),
            &WriteOptions::safe(),
        );
        assert!(result.is_err());
    }
}
