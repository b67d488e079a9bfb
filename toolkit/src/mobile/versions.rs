use crate::event::Event;
use crate::matcher::Matcher;
use crate::mobile::shared_state;
use crate::value;

/// State owner of the event hub, whose state lists registered extensions.
pub const EVENT_HUB_OWNER: &str = "com.adobe.module.eventhub";

/// Whether the event is the event hub's shared state.
pub fn is_match(event: &Event) -> bool {
    shared_state::is_match(event) && shared_state::state_owner(event) == Some(EVENT_HUB_OWNER)
}

/// Matcher for event hub shared state ("shared state versions").
pub fn matcher() -> Matcher {
    Matcher::new("sharedStateVersions", is_match)
}

/// Whether the event hub state lists `extension` as registered.
pub fn has_extension(event: &Event, extension: &str) -> bool {
    shared_state::state_data(event)
        .and_then(|data| value::truthy_path(data, &["extensions", extension]))
        .is_some()
}
