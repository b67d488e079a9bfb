use assurance_toolkit::mobile::versions;
use assurance_toolkit::{match_events, Connection, Event};

use crate::validator::{Settings, Validator};
use crate::verdict::Verdict;

/// Extension name the Edge Network extension registers under.
const EDGE_EXTENSION: &str = "com.adobe.edge";

/// Checks that the Edge Network extension registered with the event hub.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeInstalled;

impl Validator for EdgeInstalled {
    fn name(&self) -> &'static str {
        "edge-installed"
    }

    fn description(&self) -> &'static str {
        "Edge Network extension is registered with the mobile SDK"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, _connections: &[Connection]) -> Verdict {
        let version_events = match_events(&versions::matcher(), events);

        if version_events.is_empty() {
            return Verdict::not_matched(
                "No version info could be found. Either Assurance isn't registered or it did not pass in cached events upon activating.",
            );
        }

        if version_events
            .iter()
            .any(|e| versions::has_extension(e, EDGE_EXTENSION))
        {
            Verdict::matched("Edge extension was registered.")
        } else {
            Verdict::not_matched("Did not detect initialization of the Edge extension.")
                .with_event_refs(version_events)
        }
    }
}
