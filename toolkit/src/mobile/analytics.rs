use crate::event::{Annotation, Event};
use crate::matcher::Matcher;
use crate::mobile::SOURCE_REQUEST_CONTENT;

/// Event type of generic track calls.
pub const GENERIC_TRACK_TYPE: &str = "com.adobe.eventtype.generic.track";
/// Event type of lifecycle requests.
pub const GENERIC_LIFECYCLE_TYPE: &str = "com.adobe.eventtype.generic.lifecycle";
/// Annotation kind attached by the analytics post processor.
pub const ANALYTICS_ANNOTATION: &str = "analytics";

/// Whether the event is a `trackAction`/`trackState` request.
pub fn is_generic_track(event: &Event) -> bool {
    event.is_type_and_source(GENERIC_TRACK_TYPE, SOURCE_REQUEST_CONTENT)
}

/// Whether the event is a lifecycle start request.
pub fn is_lifecycle_start(event: &Event) -> bool {
    event.is_type_and_source(GENERIC_LIFECYCLE_TYPE, SOURCE_REQUEST_CONTENT)
        && event
            .event_data_key("action")
            .and_then(serde_json::Value::as_str)
            == Some("start")
}

/// Matcher for generic track requests.
pub fn generic_track() -> Matcher {
    Matcher::new("genericTrack", is_generic_track)
}

/// Matcher for lifecycle start requests.
pub fn lifecycle_start() -> Matcher {
    Matcher::new("lifecycleStart", is_lifecycle_start)
}

/// Analytics annotation on an event, if the post processor ran.
pub fn analytics_annotation(event: &Event) -> Option<&Annotation> {
    event.annotation(ANALYTICS_ANNOTATION)
}
