//! The validator contract.

use assurance_toolkit::{Connection, Event};
use serde_json::{Map, Value};

use crate::verdict::Verdict;

/// Free-form host settings forwarded to every validator.
pub type Settings = Map<String, Value>;

/// A standalone validation rule.
///
/// Implementations are pure: the same events, settings, and connections
/// always produce the same verdict, and no state survives between calls.
pub trait Validator: Send + Sync {
    /// Stable identifier used on the command line and in config.
    fn name(&self) -> &'static str;

    /// One-line description of what the validator checks.
    fn description(&self) -> &'static str;

    /// Evaluate a captured batch.
    ///
    /// `events` are ordered newest first.
    fn evaluate(&self, events: &[Event], settings: &Settings, connections: &[Connection])
        -> Verdict;
}
