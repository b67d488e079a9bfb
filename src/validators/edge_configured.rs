use assurance_toolkit::mobile::configuration;
use assurance_toolkit::value::is_truthy;
use assurance_toolkit::{match_events, Connection, Event};

use crate::validator::{Settings, Validator};
use crate::verdict::Verdict;

/// Checks that a configuration response carried an edge configuration id.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeConfigured;

impl Validator for EdgeConfigured {
    fn name(&self) -> &'static str {
        "edge-configured"
    }

    fn description(&self) -> &'static str {
        "Configuration received by the SDK contains an edge configuration id"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, _connections: &[Connection]) -> Verdict {
        let config_events = match_events(&configuration::matcher(), events);

        if config_events.is_empty() {
            return Verdict::not_matched(
                "No configuration info could be found. Either Assurance isn't registered or it did not pass in cached events upon activating.",
            );
        }

        let has_edge_config = |event: &&Event| {
            configuration::event_data_key(event, "edge.configId").is_some_and(is_truthy)
        };

        if config_events.iter().any(has_edge_config) {
            Verdict::matched("Edge extension was configured correctly")
        } else {
            Verdict::not_matched(
                "Did not detect the required configuration values. You may need to install the extension in launch and publish those settings.",
            )
            .with_event_refs(config_events)
        }
    }
}
