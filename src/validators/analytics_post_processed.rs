use assurance_toolkit::mobile::analytics;
use assurance_toolkit::value::truthy_path;
use assurance_toolkit::{match_events, Connection, Event, Matcher};

use crate::validator::{Settings, Validator};
use crate::verdict::Verdict;

/// Checks that every Analytics hit was annotated with post-processed data.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsPostProcessed;

/// Whether the analytics post processor attached a hit debug message.
fn has_post_processed_data(event: &Event) -> bool {
    analytics::analytics_annotation(event)
        .and_then(|annotation| truthy_path(&annotation.payload, &["hitDebugMessage"]))
        .is_some()
}

impl Validator for AnalyticsPostProcessed {
    fn name(&self) -> &'static str {
        "adobe-analytics-post-processed-data"
    }

    fn description(&self) -> &'static str {
        "Analytics track and lifecycle hits carry post-processed data"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, _connections: &[Connection]) -> Verdict {
        let matcher = Matcher::any([analytics::generic_track(), analytics::lifecycle_start()]);
        let invalid: Vec<&Event> = match_events(&matcher, events)
            .into_iter()
            .filter(|e| !has_post_processed_data(e))
            .collect();

        if invalid.is_empty() {
            Verdict::matched("Valid! All Analytics events have post-processed data!")
        } else {
            Verdict::not_matched("Invalid! These events are missing post-processed data:")
                .with_event_refs(invalid)
        }
    }
}
