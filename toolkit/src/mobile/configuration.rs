use serde_json::Value;

use crate::event::Event;
use crate::matcher::Matcher;
use crate::mobile::SOURCE_RESPONSE_CONTENT;

/// Event type of configuration events.
pub const EVENT_TYPE: &str = "com.adobe.eventtype.configuration";

/// Whether the event has the configuration type, regardless of source.
pub fn is_configuration_type(event: &Event) -> bool {
    event.event_type() == Some(EVENT_TYPE)
}

/// Whether the event is a configuration response.
pub fn is_match(event: &Event) -> bool {
    event.is_type_and_source(EVENT_TYPE, SOURCE_RESPONSE_CONTENT)
}

/// Matcher for configuration responses.
pub fn matcher() -> Matcher {
    Matcher::new("configuration", is_match)
}

/// A single configuration key from the event data.
pub fn event_data_key<'a>(event: &'a Event, key: &str) -> Option<&'a Value> {
    event.event_data_key(key)
}
