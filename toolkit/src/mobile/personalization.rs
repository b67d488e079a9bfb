//! Personalization requests sent to the edge and the decisions it returns.

use serde_json::Value;

use crate::event::Event;
use crate::matcher::Matcher;
use crate::mobile::SOURCE_REQUEST_CONTENT;
use crate::value;

/// Event type of edge network events.
pub const EDGE_TYPE: &str = "com.adobe.eventtype.edge";
/// Event source of personalization decision responses.
pub const DECISIONS_SOURCE: &str = "personalization:decisions";

/// Whether the event is an edge request carrying a personalization query.
pub fn is_edge_request(event: &Event) -> bool {
    event.is_type_and_source(EDGE_TYPE, SOURCE_REQUEST_CONTENT)
        && event
            .event_data()
            .and_then(|data| value::path(data, &["query", "personalization"]))
            .is_some()
}

/// Whether the event is a personalization decisions response.
pub fn is_edge_response(event: &Event) -> bool {
    event.is_type_and_source(EDGE_TYPE, DECISIONS_SOURCE)
}

/// Matcher for personalization edge requests.
pub fn edge_request() -> Matcher {
    Matcher::new("personalizationEdgeRequest", is_edge_request)
}

/// Matcher for personalization edge responses.
pub fn edge_response() -> Matcher {
    Matcher::new("personalizationEdgeResponse", is_edge_response)
}

/// Decision scopes a request asked for. Missing lists read as empty.
pub fn decision_scopes(event: &Event) -> Vec<&str> {
    event
        .event_data()
        .and_then(|data| value::path(data, &["query", "personalization", "decisionScopes"]))
        .and_then(Value::as_array)
        .map(|scopes| scopes.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Scopes covered by the propositions in a response.
pub fn response_scopes(event: &Event) -> Vec<&str> {
    event
        .event_data_key("payload")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("scope").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}
