use std::collections::HashSet;

use assurance_toolkit::mobile::personalization;
use assurance_toolkit::{match_events, Connection, Event};

use crate::validator::{Settings, Validator};
use crate::verdict::Verdict;

/// Checks that every requested decision scope came back in a response.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizeResponse;

impl Validator for OptimizeResponse {
    fn name(&self) -> &'static str {
        "aep-optimize-response"
    }

    fn description(&self) -> &'static str {
        "Every personalization decision scope requested has a matching response"
    }

    fn evaluate(&self, events: &[Event], _settings: &Settings, _connections: &[Connection]) -> Verdict {
        let requests = match_events(&personalization::edge_request(), events);
        let responses = match_events(&personalization::edge_response(), events);

        let answered: HashSet<&str> = responses
            .iter()
            .flat_map(|e| personalization::response_scopes(e))
            .collect();

        let invalid: Vec<&Event> = requests
            .into_iter()
            .filter(|request| {
                personalization::decision_scopes(request)
                    .iter()
                    .any(|scope| !answered.contains(scope))
            })
            .collect();

        if invalid.is_empty() {
            Verdict::matched("Valid! All Personalization request scopes have a matching response")
        } else {
            tracing::debug!(requests = invalid.len(), "unanswered decision scopes");
            Verdict::not_matched(
                "Invalid! There are request scopes missing a Personalization response event",
            )
            .with_event_refs(invalid)
        }
    }
}
