//! Shared events and lookups for validator tests.

#![allow(dead_code)]

use assurance_toolkit::mock::SharedStateMock;
use assurance_toolkit::{Connection, ConnectionError, ConnectionState, Event, Namespace};
use assurance_validators::{Settings, Validator, Verdict};
use serde_json::Value;

pub const CLIENT: &str = "client-1";
pub const PROPERTY_ID: &str = "mockPropertyId";
pub const COMPANY_ID: &str = "mockCompanyId";
pub const EDGE_CONFIG_ID: &str = "configId:envName";
pub const ECID: &str = "mockEcid";
pub const PUSH_TOKEN: &str = "mockPushToken";
pub const DATASET_ID: &str = "mockDatasetId";
pub const SCHEMA_URL: &str = "https://ns.adobe.com/mock/schemas/abc";

/// Shared state event carrying a single configuration key.
pub fn state_event(key: &str, value: &str) -> Event {
    state_event_for(CLIENT, key, value)
}

/// Same as [`state_event`] for another client.
pub fn state_event_for(client: &str, key: &str, value: &str) -> Event {
    SharedStateMock::new(client).state(key, value).build()
}

/// ECID event for another client.
pub fn ecid_event_for(client: &str, ecid: &str) -> Event {
    SharedStateMock::new(client).ecid(ecid).build()
}

pub fn property_event() -> Event {
    state_event("property.id", PROPERTY_ID)
}

pub fn edge_config_event() -> Event {
    state_event("edge.configId", EDGE_CONFIG_ID)
}

pub fn push_token_event() -> Event {
    state_event("pushidentifier", PUSH_TOKEN)
}

pub fn dataset_event() -> Event {
    state_event("messaging.eventDataset", DATASET_ID)
}

pub fn ecid_event() -> Event {
    ecid_event_for(CLIENT, ECID)
}

pub fn loaded(namespace: Namespace, key: &str, data: Value) -> Connection {
    Connection::new(namespace, key, ConnectionState::Loaded(data))
}

pub fn loading(namespace: Namespace, key: &str) -> Connection {
    Connection::new(namespace, key, ConnectionState::Loading)
}

pub fn failed(namespace: Namespace, key: &str, status: Option<u16>) -> Connection {
    Connection::new(
        namespace,
        key,
        ConnectionState::Failed(ConnectionError { status }),
    )
}

pub fn evaluate(validator: &dyn Validator, events: &[Event], connections: &[Connection]) -> Verdict {
    validator.evaluate(events, &Settings::new(), connections)
}
