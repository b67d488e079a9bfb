//! Builders for synthetic events.
//!
//! Fixtures and tests build events the same way the SDK shapes them so that
//! validators see exactly what a live capture would contain.

use serde_json::{json, Map, Value};

use crate::event::{
    Annotation, Event, EVENT_DATA_KEY, EVENT_NAME_KEY, EVENT_SOURCE_KEY, EVENT_TYPE_KEY,
};
use crate::mobile::{shared_state, MOBILE_VENDOR};

/// Builder for shared state change events.
#[derive(Debug, Clone, Default)]
pub struct SharedStateMock {
    client_id: Option<String>,
    owner: Option<String>,
    state_data: Map<String, Value>,
    xdm: Option<Value>,
    timestamp: Option<i64>,
}

impl SharedStateMock {
    /// Start a shared state event for the given client.
    pub fn new(client_id: &str) -> Self {
        Self {
            client_id: Some(client_id.to_owned()),
            ..Self::default()
        }
    }

    /// Set the extension that owns the state.
    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_owned());
        self
    }

    /// Add a key to the regular shared state.
    pub fn state(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.state_data.insert(key.to_owned(), value.into());
        self
    }

    /// Set the XDM shared state.
    pub fn xdm(mut self, xdm: Value) -> Self {
        self.xdm = Some(xdm);
        self
    }

    /// Set the XDM identity map to a single ECID.
    pub fn ecid(self, ecid: &str) -> Self {
        self.xdm(json!({ "identityMap": { "ECID": [{ "id": ecid }] } }))
    }

    /// Set the capture timestamp.
    pub fn timestamp(mut self, millis: i64) -> Self {
        self.timestamp = Some(millis);
        self
    }

    /// Produce the event with a fresh uuid.
    pub fn build(self) -> Event {
        let mut metadata = Map::new();
        if !self.state_data.is_empty() {
            metadata.insert(
                shared_state::STATE_DATA_KEY.to_owned(),
                Value::Object(self.state_data),
            );
        }
        if let Some(xdm) = self.xdm {
            metadata.insert(shared_state::XDM_STATE_DATA_KEY.to_owned(), xdm);
        }

        let mut data = Map::new();
        if let Some(owner) = self.owner {
            data.insert(shared_state::STATE_OWNER_KEY.to_owned(), Value::String(owner));
        }

        Event {
            uuid: uuid::Uuid::new_v4().to_string(),
            kind: Some("generic".to_owned()),
            vendor: Some(MOBILE_VENDOR.to_owned()),
            client_id: self.client_id,
            timestamp: self.timestamp,
            payload: json!({
                EVENT_TYPE_KEY: shared_state::EVENT_TYPE,
                EVENT_SOURCE_KEY: shared_state::EVENT_SOURCE,
                EVENT_NAME_KEY: "Shared state change",
                EVENT_DATA_KEY: Value::Object(data),
                "metadata": Value::Object(metadata),
            }),
            annotations: Vec::new(),
        }
    }
}

/// Builder for plain mobile SDK events.
#[derive(Debug, Clone)]
pub struct MobileEventMock {
    event_type: String,
    source: String,
    data: Map<String, Value>,
    annotations: Vec<Annotation>,
    client_id: Option<String>,
}

impl MobileEventMock {
    /// Start an event with the given SDK type and source.
    pub fn new(event_type: &str, source: &str) -> Self {
        Self {
            event_type: event_type.to_owned(),
            source: source.to_owned(),
            data: Map::new(),
            annotations: Vec::new(),
            client_id: None,
        }
    }

    /// Add a key to the event data.
    pub fn data(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_owned(), value.into());
        self
    }

    /// Attach an annotation.
    pub fn annotation(mut self, kind: &str, payload: Value) -> Self {
        self.annotations.push(Annotation {
            kind: kind.to_owned(),
            payload,
        });
        self
    }

    /// Set the client id.
    pub fn client(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.to_owned());
        self
    }

    /// Produce the event with a fresh uuid.
    pub fn build(self) -> Event {
        Event {
            uuid: uuid::Uuid::new_v4().to_string(),
            kind: Some("generic".to_owned()),
            vendor: Some(MOBILE_VENDOR.to_owned()),
            client_id: self.client_id,
            timestamp: None,
            payload: json!({
                EVENT_TYPE_KEY: self.event_type,
                EVENT_SOURCE_KEY: self.source,
                EVENT_DATA_KEY: Value::Object(self.data),
            }),
            annotations: self.annotations,
        }
    }
}
