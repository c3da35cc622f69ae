// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::{Config, LocaleConfig};
use crate::utils::console;

/// Validate configuration and print the effective values.
pub fn run_validate(config: &Config, locale: &LocaleConfig) -> Result<()> {
    let messages = &locale.messages;
    console::header(&messages.validate_starting);

    if let Err(e) = config.validate() {
        console::error(&console::render(
            &messages.validate_failed,
            &[("error", e.to_string().as_str())],
        ));
        return Err(e);
    }

    console::success(&messages.validate_success);
    console::sub_item(&console::render(
        &messages.validate_base_dir,
        &[("value", config.paths.base_dir.as_str())],
    ));
    console::sub_item(&console::render(
        &messages.validate_canonical,
        &[("value", config.languages.canonical.as_str())],
    ));
    console::sub_item(&console::render(
        &messages.validate_targets,
        &[
            ("count", config.languages.targets.len().to_string().as_str()),
            ("value", config.languages.targets.join(", ").as_str()),
        ],
    ));
    console::sub_item(&console::render(
        &messages.validate_preserved,
        &[
            (
                "count",
                config.propagation.preserved_fields.len().to_string().as_str(),
            ),
            ("value", config.propagation.preserved_fields.join(", ").as_str()),
        ],
    ));

    Ok(())
}
