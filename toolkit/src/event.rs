//! Captured SDK event model.
//!
//! Events arrive as the host recorded them. Only the envelope fields are
//! typed; the payload stays a raw JSON value and is read through the
//! accessors here and in [`crate::mobile`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value;

/// Payload key holding the SDK event type.
pub const EVENT_TYPE_KEY: &str = "ACPExtensionEventType";
/// Payload key holding the SDK event source.
pub const EVENT_SOURCE_KEY: &str = "ACPExtensionEventSource";
/// Payload key holding the SDK event name.
pub const EVENT_NAME_KEY: &str = "ACPExtensionEventName";
/// Payload key holding the SDK event data.
pub const EVENT_DATA_KEY: &str = "ACPExtensionEventData";

/// Annotation attached to an event by a host-side processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Processor that produced the annotation (e.g. `analytics`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Annotation body.
    #[serde(default)]
    pub payload: Value,
}

/// A single captured event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier assigned at capture time.
    pub uuid: String,

    /// Envelope type (e.g. `generic`).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Envelope vendor (e.g. `com.adobe.griffon.mobile`).
    #[serde(default)]
    pub vendor: Option<String>,

    /// Client session the event was captured from.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Capture time in milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,

    /// Raw event payload.
    #[serde(default)]
    pub payload: Value,

    /// Host annotations.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Event {
    /// SDK event type from the payload.
    pub fn event_type(&self) -> Option<&str> {
        value::string_at(&self.payload, &[EVENT_TYPE_KEY])
    }

    /// SDK event source from the payload.
    pub fn event_source(&self) -> Option<&str> {
        value::string_at(&self.payload, &[EVENT_SOURCE_KEY])
    }

    /// SDK event name from the payload.
    pub fn event_name(&self) -> Option<&str> {
        value::string_at(&self.payload, &[EVENT_NAME_KEY])
    }

    /// SDK event data object, if present.
    pub fn event_data(&self) -> Option<&Value> {
        self.payload.get(EVENT_DATA_KEY)
    }

    /// A single key of the SDK event data.
    pub fn event_data_key(&self, key: &str) -> Option<&Value> {
        self.event_data().and_then(|data| data.get(key))
    }

    /// First annotation of the given kind.
    pub fn annotation(&self, kind: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }

    /// Whether the SDK type and source both equal the given values.
    pub fn is_type_and_source(&self, event_type: &str, source: &str) -> bool {
        self.event_type() == Some(event_type) && self.event_source() == Some(source)
    }
}
