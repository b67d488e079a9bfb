//! Validator verdicts.
//!
//! A [`Verdict`] is the only thing a validator returns: an outcome, a short
//! message, and optionally an explanation, the offending event uuids, and
//! links that help fix the problem.

use std::fmt;

use assurance_toolkit::Event;
use serde::{Deserialize, Serialize};

/// Outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Everything the validator checks is in place.
    #[serde(rename = "matched")]
    Matched,
    /// The validator found a problem.
    #[serde(rename = "not matched")]
    NotMatched,
    /// A lookup the validator depends on has not resolved yet.
    #[serde(rename = "loading")]
    Loading,
    /// Not enough data to decide.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Outcome {
    /// Wire label for the outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::NotMatched => "not matched",
            Self::Loading => "loading",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A labelled deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Text shown to the user.
    pub label: String,
    /// Target URL.
    pub link: String,
}

impl Link {
    /// Create a link.
    pub fn new(label: &str, link: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            link: link.into(),
        }
    }
}

/// Result of evaluating one validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Outcome.
    pub result: Outcome,
    /// Short human-readable message.
    pub message: String,
    /// Longer explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Uuids of the events that caused the outcome.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    /// Links that help resolve the outcome.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Verdict {
    fn new(result: Outcome, message: impl Into<String>) -> Self {
        Self {
            result,
            message: message.into(),
            details: None,
            events: Vec::new(),
            links: Vec::new(),
        }
    }

    /// A passing verdict.
    pub fn matched(message: impl Into<String>) -> Self {
        Self::new(Outcome::Matched, message)
    }

    /// A failing verdict.
    pub fn not_matched(message: impl Into<String>) -> Self {
        Self::new(Outcome::NotMatched, message)
    }

    /// A verdict waiting on a lookup.
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(Outcome::Loading, message)
    }

    /// The fallback when no stage resolved.
    pub fn unknown() -> Self {
        Self::new(Outcome::Unknown, "Unknown")
    }

    /// Attach an explanation.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach event uuids.
    pub fn with_events<I, S>(mut self, uuids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events.extend(uuids.into_iter().map(Into::into));
        self
    }

    /// Attach the uuids of the given events.
    pub fn with_event_refs<'a>(self, events: impl IntoIterator<Item = &'a Event>) -> Self {
        self.with_events(events.into_iter().map(|e| e.uuid.clone()))
    }

    /// Attach links.
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links.extend(links);
        self
    }

    /// Whether the validator found a problem.
    pub fn is_failure(&self) -> bool {
        self.result == Outcome::NotMatched
    }
}
