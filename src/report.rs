//! Running validators over a session and rendering the verdicts.

use std::fmt;

use assurance_toolkit::Session;
use serde::Serialize;
use tracing::debug;

use crate::validator::{Settings, Validator};
use crate::verdict::{Outcome, Verdict};

/// One validator's verdict.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Validator name.
    pub validator: &'static str,
    /// What it concluded.
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Verdicts for a whole run, in validator order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Report {
    /// One entry per validator that ran.
    pub entries: Vec<Entry>,
}

impl Report {
    /// Evaluate every validator against the session.
    ///
    /// `settings` are merged over the session's own settings.
    pub fn run(validators: &[Box<dyn Validator>], session: &Session, settings: &Settings) -> Self {
        let mut merged = session.settings.clone();
        merged.extend(settings.iter().map(|(k, v)| (k.clone(), v.clone())));

        let entries = validators
            .iter()
            .map(|validator| {
                let verdict = validator.evaluate(&session.events, &merged, &session.connections);
                debug!(
                    validator = validator.name(),
                    result = %verdict.result,
                    message = %verdict.message,
                    "validator evaluated"
                );
                Entry {
                    validator: validator.name(),
                    verdict,
                }
            })
            .collect();

        Self { entries }
    }

    /// Whether any validator found a problem.
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.verdict.is_failure())
    }

    /// Number of entries with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries
            .iter()
            .filter(|e| e.verdict.result == outcome)
            .count()
    }

    /// Pretty JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = &self.verdict;
        writeln!(f, "{:<40} {:<12} {}", self.validator, verdict.result, verdict.message)?;
        if let Some(details) = &verdict.details {
            writeln!(f, "    {details}")?;
        }
        for uuid in &verdict.events {
            writeln!(f, "    event: {uuid}")?;
        }
        for link in &verdict.links {
            writeln!(f, "    {}: {}", link.label, link.link)?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        writeln!(
            f,
            "\n{} matched, {} not matched, {} loading, {} unknown",
            self.count(Outcome::Matched),
            self.count(Outcome::NotMatched),
            self.count(Outcome::Loading),
            self.count(Outcome::Unknown)
        )
    }
}
