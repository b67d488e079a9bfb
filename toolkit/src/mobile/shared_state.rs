//! Shared state change events.
//!
//! Extensions publish their latest state through the event hub. The regular
//! state lives under `payload.metadata["state.data"]` and the XDM state under
//! `payload.metadata["xdm.state.data"]`.

use serde_json::Value;

use crate::event::Event;
use crate::matcher::Matcher;
use crate::value;

/// Event type of shared state changes.
pub const EVENT_TYPE: &str = "com.adobe.eventtype.hub";
/// Event source of shared state changes.
pub const EVENT_SOURCE: &str = "com.adobe.eventsource.sharedstate";
/// Event data key naming the extension that owns the state.
pub const STATE_OWNER_KEY: &str = "stateowner";
/// Metadata key of the regular shared state.
pub const STATE_DATA_KEY: &str = "state.data";
/// Metadata key of the XDM shared state.
pub const XDM_STATE_DATA_KEY: &str = "xdm.state.data";

/// Whether the event is a shared state change.
pub fn is_match(event: &Event) -> bool {
    event.event_source() == Some(EVENT_SOURCE)
}

/// Matcher for shared state changes.
pub fn matcher() -> Matcher {
    Matcher::new("sharedState", is_match)
}

/// Client session the state belongs to.
pub fn client_id(event: &Event) -> Option<&str> {
    event.client_id.as_deref().filter(|id| !id.is_empty())
}

/// Extension that published the state.
pub fn state_owner(event: &Event) -> Option<&str> {
    event
        .event_data_key(STATE_OWNER_KEY)
        .and_then(Value::as_str)
}

/// Regular shared state snapshot.
pub fn state_data(event: &Event) -> Option<&Value> {
    value::path(&event.payload, &["metadata", STATE_DATA_KEY])
}

/// A single key of the regular shared state, as a non-empty string.
pub fn state_string<'a>(event: &'a Event, key: &str) -> Option<&'a str> {
    state_data(event)
        .and_then(|data| data.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// XDM shared state snapshot.
pub fn xdm(event: &Event) -> Option<&Value> {
    value::path(&event.payload, &["metadata", XDM_STATE_DATA_KEY])
}

/// First ECID in the XDM identity map.
pub fn ecid(event: &Event) -> Option<&str> {
    let xdm = xdm(event)?;
    value::path(xdm, &["identityMap", "ECID"])
        .and_then(Value::as_array)
        .and_then(|ids| ids.first())
        .and_then(|first| value::string_at(first, &["id"]))
}
