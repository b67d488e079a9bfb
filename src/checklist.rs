//! Prioritized dependency checklist.
//!
//! Connection-backed validators walk a fixed list of lookups (company,
//! property, edge configuration, schema, profile, ...). Each [`Stage`] checks
//! the connections addressed by the clients' keys and stops the walk at the
//! first lookup that is still loading or failed. Stages that resolve hand
//! their data to the validator for the next step.

use assurance_toolkit::{Connection, ConnectionError, ConnectionState, Namespace};
use serde_json::Value;
use tracing::debug;

use crate::verdict::Verdict;

/// Result of a checklist step: the resolved value or the verdict that blocks
/// the rest of the walk.
pub type Gate<T> = Result<T, Verdict>;

/// The key a client addresses a stage with.
#[derive(Debug, Clone)]
pub struct StageKey<'a> {
    /// Context value to match.
    pub value: &'a str,
    /// Uuid of the event the value came from.
    pub source: Option<String>,
}

impl<'a> StageKey<'a> {
    /// Key with the event that produced it.
    pub fn new(value: &'a str, source: Option<String>) -> Self {
        Self { value, source }
    }
}

/// One lookup in the checklist.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Namespace of the lookup.
    pub namespace: Namespace,
    /// Message while the lookup is loading.
    pub loading: &'static str,
    /// Message when the lookup failed.
    pub failed: &'static str,
    /// Explanation for an access denial.
    pub forbidden: &'static str,
    /// Explanation for any other failure.
    pub unknown: &'static str,
}

impl Stage {
    /// Explanation matching the host's error code.
    pub fn failure_details(&self, error: &ConnectionError) -> &'static str {
        if error.is_forbidden() {
            self.forbidden
        } else {
            self.unknown
        }
    }

    /// Resolve the stage for every client key.
    ///
    /// Connections are scanned in order and, for each, every client in order.
    /// The first loading or failed match blocks. The returned vector is
    /// aligned with `keys` and holds the first loaded data each key matched.
    pub fn resolve<'c>(
        &self,
        connections: &'c [Connection],
        keys: &[Option<StageKey<'_>>],
    ) -> Gate<Vec<Option<&'c Value>>> {
        let mut resolved: Vec<Option<&'c Value>> = vec![None; keys.len()];

        for connection in connections.iter().filter(|c| c.namespace == self.namespace) {
            for (slot, key) in resolved.iter_mut().zip(keys) {
                let Some(key) = key else {
                    continue;
                };
                if !connection.addresses(self.namespace, key.value) {
                    continue;
                }

                match &connection.state {
                    ConnectionState::Loading => {
                        debug!(namespace = ?self.namespace, key = key.value, "stage loading");
                        return Err(Verdict::loading(self.loading));
                    }
                    ConnectionState::Failed(error) => {
                        debug!(
                            namespace = ?self.namespace,
                            key = key.value,
                            status = ?error.status,
                            "stage failed"
                        );
                        return Err(Verdict::not_matched(self.failed)
                            .with_details(self.failure_details(error))
                            .with_events(key.source.clone()));
                    }
                    ConnectionState::Loaded(data) => {
                        if slot.is_none() {
                            *slot = Some(data);
                        }
                    }
                    ConnectionState::Idle => {}
                }
            }
        }

        Ok(resolved)
    }
}

/// Loaded data for each key in `namespace`, ignoring loading and failed
/// lookups. Used for lookups that only enrich a verdict.
pub fn loaded_only<'c>(
    connections: &'c [Connection],
    namespace: Namespace,
    keys: &[Option<&str>],
) -> Vec<Option<&'c Value>> {
    keys.iter()
        .map(|key| {
            let key = (*key)?;
            connections
                .iter()
                .filter(|c| c.addresses(namespace, key))
                .find_map(Connection::data)
        })
        .collect()
}
