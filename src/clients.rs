//! Per-client view of shared state.
//!
//! Shared state events are grouped by client id. For each client only the
//! most recent value of a field is kept, together with the event that carried
//! it, so a verdict can point back at its source.

use assurance_toolkit::mobile::shared_state;
use assurance_toolkit::Event;

/// A shared state field a validator tracks per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First ECID in the XDM identity map.
    Ecid,
    /// `property.id` from the configuration state.
    PropertyId,
    /// `edge.configId` from the configuration state.
    EdgeConfigId,
    /// `pushidentifier` from the identity state.
    PushToken,
    /// `messaging.eventDataset` from the messaging state.
    TrackingDataset,
}

impl Field {
    /// Extract this field from a shared state event.
    fn extract(self, event: &Event) -> Option<&str> {
        match self {
            Self::Ecid => shared_state::ecid(event),
            Self::PropertyId => shared_state::state_string(event, "property.id"),
            Self::EdgeConfigId => shared_state::state_string(event, "edge.configId"),
            Self::PushToken => shared_state::state_string(event, "pushidentifier"),
            Self::TrackingDataset => shared_state::state_string(event, "messaging.eventDataset"),
        }
    }
}

/// A value together with the event it was read from.
#[derive(Debug, Clone, Copy)]
pub struct Sourced<'a> {
    /// The field value.
    pub value: &'a str,
    /// Event that carried it.
    pub event: &'a Event,
}

/// Shared state collected for one client.
#[derive(Debug, Clone)]
pub struct Client<'a> {
    /// Client id.
    pub id: &'a str,
    fields: Vec<(Field, Sourced<'a>)>,
}

impl<'a> Client<'a> {
    fn new(id: &'a str) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    /// Most recent value of a field with its source event.
    pub fn sourced(&self, field: Field) -> Option<Sourced<'a>> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, sourced)| *sourced)
    }

    /// Most recent value of a field.
    pub fn get(&self, field: Field) -> Option<&'a str> {
        self.sourced(field).map(|s| s.value)
    }

    /// Uuid of the event that carried a field, if any.
    pub fn source_uuid(&self, field: Field) -> Option<String> {
        self.sourced(field).map(|s| s.event.uuid.clone())
    }

    fn record(&mut self, field: Field, event: &'a Event) {
        if self.sourced(field).is_some() {
            return;
        }
        if let Some(value) = field.extract(event) {
            self.fields.push((field, Sourced { value, event }));
        }
    }
}

/// Clients in the order they first appear in the batch.
#[derive(Debug, Clone, Default)]
pub struct ClientTable<'a> {
    clients: Vec<Client<'a>>,
}

impl<'a> ClientTable<'a> {
    /// Collect the given fields from every shared state event.
    ///
    /// Events are expected newest first, so the first value seen wins.
    pub fn collect(events: &'a [Event], fields: &[Field]) -> Self {
        let mut table = Self::default();

        for event in events.iter().filter(|e| shared_state::is_match(e)) {
            let Some(id) = shared_state::client_id(event) else {
                continue;
            };
            let client = table.entry(id);
            for field in fields {
                client.record(*field, event);
            }
        }

        tracing::debug!(clients = table.clients.len(), "collected shared state");
        table
    }

    fn entry(&mut self, id: &'a str) -> &mut Client<'a> {
        let index = match self.clients.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => {
                self.clients.push(Client::new(id));
                self.clients.len().saturating_sub(1)
            }
        };
        &mut self.clients[index]
    }

    /// Clients in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Client<'a>> {
        self.clients.iter()
    }

    /// Whether no shared state was found.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Number of clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }
}
