// src/pipeline/info.rs

use crate::models::{Config, LocaleConfig};
use crate::storage::DocumentStorage;
use crate::utils::console;

/// Presence of each configured document, canonical first.
pub fn document_presence(config: &Config, storage: &dyn DocumentStorage) -> Vec<(String, bool)> {
    std::iter::once(&config.languages.canonical)
        .chain(
            config
                .languages
                .targets
                .iter()
                .filter(|lang| **lang != config.languages.canonical),
        )
        .map(|lang| (lang.clone(), storage.exists(lang)))
        .collect()
}

/// Print where each language document lives and whether it exists.
pub fn run_info(config: &Config, locale: &LocaleConfig, storage: &dyn DocumentStorage) {
    let messages = &locale.messages;
    console::header(&console::render(
        &messages.info_header,
        &[("path", config.paths.base_dir.as_str())],
    ));

    for (lang, present) in document_presence(config, storage) {
        let location = storage.location(&lang);
        let template = if present {
            &messages.info_present
        } else {
            &messages.info_missing
        };
        console::sub_item(&console::render(
            template,
            &[("lang", lang.as_str()), ("path", location.as_str())],
        ));
    }
}
