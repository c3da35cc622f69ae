// src/pipeline/propagate.rs

//! Structure propagation.
//!
//! The result for each target language starts as a full copy of the
//! canonical document. Only the preserved field paths are then patched back
//! from the target's previous content, and only where both documents can
//! address the path. Nothing else is merged: sequences, extra keys and stale
//! values in the target are all replaced by the canonical shape.

use crate::error::{AppError, Result};
use crate::models::{
    Config, Document, FieldPath, LanguageOutcome, LanguageStatus, LocaleConfig, PropagationReport,
};
use crate::storage::{DocumentStorage, WriteOptions};
use crate::utils::console;

/// Build the updated target document.
///
/// A `None` target behaves like an empty document: the result is the
/// canonical document verbatim.
pub fn propagate(
    canonical: &Document,
    target: Option<&Document>,
    preserved: &[FieldPath],
) -> Document {
    let mut result = canonical.clone();

    let Some(target) = target else {
        return result;
    };

    for path in preserved {
        if let Some(value) = target.get(path)
            && result.replace(path, value.clone()).is_some()
        {
            log::debug!("Preserved existing value at {path}");
        }
    }

    result
}

/// Propagate the canonical document into every configured target language.
///
/// Only a missing or unreadable canonical document is fatal. Every other
/// failure is recorded against its language and the batch moves on.
pub fn run_propagate(
    config: &Config,
    locale: &LocaleConfig,
    storage: &dyn DocumentStorage,
    options: &WriteOptions,
) -> Result<PropagationReport> {
    let messages = &locale.messages;
    console::header(&messages.propagate_starting);
    if options.dry_run {
        console::warn(&messages.dry_run_notice);
    }

    // Language codes become file names, so they are checked before any I/O.
    config.validate()?;
    let preserved = config.preserved_paths()?;
    let canonical_lang = config.languages.canonical.as_str();
    let canonical_location = storage.location(canonical_lang);

    let canonical = storage.load(canonical_lang)?.ok_or_else(|| {
        AppError::document(
            canonical_lang,
            format!("canonical document not found at {canonical_location}"),
        )
    })?;

    console::info(&console::render(
        &messages.canonical_loaded,
        &[
            ("lang", canonical_lang),
            ("path", canonical_location.as_str()),
            ("count", canonical.len().to_string().as_str()),
        ],
    ));

    let mut report = PropagationReport::new(options.dry_run);

    for lang in config.languages.targets.iter().map(String::as_str) {
        if lang == canonical_lang {
            log::warn!("Canonical language {lang} listed as a target");
            console::warn(&console::render(
                &messages.canonical_in_targets,
                &[("lang", lang)],
            ));
            continue;
        }

        let outcome = sync_language(lang, &canonical, &preserved, storage, options);
        report_outcome(locale, &outcome);
        report.push(outcome);
    }

    report.finish();
    console::summary(&messages.batch_complete, &report.summary_items());

    Ok(report)
}

/// Read, propagate and write one target language.
fn sync_language(
    lang: &str,
    canonical: &Document,
    preserved: &[FieldPath],
    storage: &dyn DocumentStorage,
    options: &WriteOptions,
) -> LanguageOutcome {
    let location = storage.location(lang);

    let existing = match storage.load(lang) {
        Ok(existing) => existing,
        Err(e) => return LanguageOutcome::failed(lang, location, e),
    };

    let updated = propagate(canonical, existing.as_ref(), preserved);
    let status = match &existing {
        None => LanguageStatus::Created,
        Some(previous) if previous.is_identical_to(&updated) => LanguageStatus::Unchanged,
        Some(_) => LanguageStatus::Updated,
    };

    if !options.dry_run {
        match storage.save(lang, &updated) {
            Ok(written) => log::debug!(
                "{lang}: {status}, {} bytes to {} at {}",
                written.bytes,
                written.location,
                written.timestamp.to_rfc3339()
            ),
            Err(e) => return LanguageOutcome::failed(lang, location, e),
        }
    }

    LanguageOutcome::new(lang, location, status)
}

/// Print the console status line for one language.
pub(crate) fn report_outcome(locale: &LocaleConfig, outcome: &LanguageOutcome) {
    let messages = &locale.messages;
    let lang = outcome.lang.as_str();
    let path = outcome.location.as_str();

    match &outcome.status {
        LanguageStatus::Created => console::success(&console::render(
            &messages.language_created,
            &[("lang", lang), ("path", path)],
        )),
        LanguageStatus::Updated => console::success(&console::render(
            &messages.language_updated,
            &[("lang", lang), ("path", path)],
        )),
        LanguageStatus::Unchanged => console::success(&console::render(
            &messages.language_unchanged,
            &[("lang", lang), ("path", path)],
        )),
        LanguageStatus::NotFound => console::warn(&console::render(
            &messages.language_not_found,
            &[("lang", lang), ("path", path)],
        )),
        LanguageStatus::Failed(error) => console::failure(&console::render(
            &messages.language_failed,
            &[("lang", lang), ("path", path), ("error", error.as_str())],
        )),
    }
}
