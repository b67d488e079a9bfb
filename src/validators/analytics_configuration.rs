use assurance_toolkit::mobile::configuration;
use assurance_toolkit::value::is_truthy;
use assurance_toolkit::{Connection, Event};

use crate::validator::{Settings, Validator};
use crate::verdict::Verdict;

/// Checks that the Analytics extension received a report suite and server.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsConfiguration;

fn has_analytics_config(event: &Event) -> bool {
    let present = |key| configuration::event_data_key(event, key).is_some_and(is_truthy);
    present("analytics.rsids") && present("analytics.server")
}

impl Validator for AnalyticsConfiguration {
    fn name(&self) -> &'static str {
        "adobe-analytics-configuration"
    }

    fn description(&self) -> &'static str {
        "Adobe Analytics extension has a report suite and tracking server configured"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, _connections: &[Connection]) -> Verdict {
        let config_events: Vec<&Event> = events
            .iter()
            .filter(|e| configuration::is_configuration_type(e))
            .collect();

        if config_events.iter().any(|e| has_analytics_config(e)) {
            Verdict::matched("Valid! Adobe Analytics Extension has been configured!")
        } else {
            Verdict::not_matched("Missing required configuration for Adobe Analytics")
                .with_event_refs(config_events)
        }
    }
}
