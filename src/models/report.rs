//! Per-language outcomes of a batch run.

use std::fmt;

use chrono::{DateTime, Utc};

/// What happened to one language document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageStatus {
    /// No prior document; a new one was written
    Created,
    /// Prior document rewritten with new content
    Updated,
    /// Prior document already matched the result (still rewritten)
    Unchanged,
    /// No prior document and creation was not requested
    NotFound,
    /// Read, parse or write failed; the file was left as it was
    Failed(String),
}

impl LanguageStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for LanguageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::NotFound => f.write_str("not found"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Outcome for a single language.
#[derive(Debug, Clone)]
pub struct LanguageOutcome {
    pub lang: String,
    pub location: String,
    pub status: LanguageStatus,
}

impl LanguageOutcome {
    pub fn new(
        lang: impl Into<String>,
        location: impl Into<String>,
        status: LanguageStatus,
    ) -> Self {
        Self {
            lang: lang.into(),
            location: location.into(),
            status,
        }
    }

    pub fn failed(
        lang: impl Into<String>,
        location: impl Into<String>,
        error: impl fmt::Display,
    ) -> Self {
        Self::new(lang, location, LanguageStatus::Failed(error.to_string()))
    }
}

/// Summary of a propagation or patch batch.
#[derive(Debug, Clone)]
pub struct PropagationReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub dry_run: bool,
    pub outcomes: Vec<LanguageOutcome>,
}

impl PropagationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: LanguageOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Outcome for a language, if it was processed.
    pub fn outcome(&self, lang: &str) -> Option<&LanguageOutcome> {
        self.outcomes.iter().find(|o| o.lang == lang)
    }

    pub fn count(&self, status: &LanguageStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|o| std::mem::discriminant(&o.status) == std::mem::discriminant(status))
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_failure()).count()
    }

    /// Key/value lines for the console summary block.
    pub fn summary_items(&self) -> Vec<(&'static str, String)> {
        let mut items = vec![
            ("Languages", self.outcomes.len().to_string()),
            ("Created", self.count(&LanguageStatus::Created).to_string()),
            ("Updated", self.count(&LanguageStatus::Updated).to_string()),
            ("Unchanged", self.count(&LanguageStatus::Unchanged).to_string()),
            ("Not found", self.count(&LanguageStatus::NotFound).to_string()),
            ("Failed", self.failure_count().to_string()),
        ];
        if let Some(finished) = self.finished_at {
            let elapsed = finished - self.started_at;
            items.push(("Elapsed", format!("{} ms", elapsed.num_milliseconds())));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_status_kind() {
        let mut report = PropagationReport::new(false);
        report.push(LanguageOutcome::new("nl", "nl.json", LanguageStatus::Updated));
        report.push(LanguageOutcome::new("de", "de.json", LanguageStatus::Created));
        report.push(LanguageOutcome::failed("fr", "fr.json", "bad json"));
        report.push(LanguageOutcome::failed("fi", "fi.json", "denied"));

        assert_eq!(report.count(&LanguageStatus::Updated), 1);
        assert_eq!(report.count(&LanguageStatus::Failed(String::new())), 2);
        assert_eq!(report.failure_count(), 2);
        assert_eq!(
            report.outcome("fr").map(|o| &o.status),
            Some(&LanguageStatus::Failed("bad json".into()))
        );
    }

    #[test]
    fn summary_includes_elapsed_after_finish() {
        let mut report = PropagationReport::new(true);
        assert!(!report.summary_items().iter().any(|(k, _)| *k == "Elapsed"));
        report.finish();
        assert!(report.summary_items().iter().any(|(k, _)| *k == "Elapsed"));
    }
}
