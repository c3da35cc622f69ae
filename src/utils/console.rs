// src/utils/console.rs

//! User-facing console output with server-style formatting.
//!
//! Status lines carry a timestamp and a level tag. Diagnostics go through
//! the `log` facade instead; this module is only for the per-language
//! status lines and summaries a user reads.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

/// Suppresses all console output when set.
static QUIET: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn enabled() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

/// Format a line with timestamp and level.
fn format_line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}", timestamp, level.as_str(), message)
}

/// Substitute `{name}` placeholders in a message template.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}

pub fn info(message: &str) {
    if enabled() {
        println!("{}", format_line(Level::Info, message));
    }
}

pub fn warn(message: &str) {
    if enabled() {
        eprintln!("{}", format_line(Level::Warn, message));
    }
}

pub fn error(message: &str) {
    if enabled() {
        eprintln!("{}", format_line(Level::Error, message));
    }
}

/// Successful per-language status.
pub fn success(message: &str) {
    if enabled() {
        println!("{}", format_line(Level::Info, &format!("✓ {message}")));
    }
}

/// Failed per-language status.
pub fn failure(message: &str) {
    if enabled() {
        eprintln!("{}", format_line(Level::Error, &format!("✗ {message}")));
    }
}

pub fn header(title: &str) {
    if enabled() {
        println!();
        println!("{}", "═".repeat(60));
        println!("  {title}");
        println!("{}", "═".repeat(60));
    }
}

pub fn sub_item(message: &str) {
    if enabled() {
        println!("    {message}");
    }
}

pub fn summary(title: &str, items: &[(&str, String)]) {
    if enabled() {
        println!();
        println!("[{}] [SUMMARY] {}", Local::now().format("%H:%M:%S"), title);
        for (key, value) in items {
            println!("    {key}: {value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_all_placeholders() {
        let line = render(
            "Error updating {lang}: {error} ({lang})",
            &[("lang", "fr"), ("error", "denied")],
        );
        assert_eq!(line, "Error updating fr: denied (fr)");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        assert_eq!(render("{lang} {path}", &[("lang", "nl")]), "nl {path}");
    }

    #[test]
    fn format_line_has_level_tag() {
        let line = format_line(Level::Warn, "careful");
        assert!(line.ends_with("[WARN] careful"));
    }
}
