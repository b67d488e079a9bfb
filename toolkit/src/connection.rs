//! Pre-resolved network lookups.
//!
//! The host fetches auxiliary data (launch properties, profiles, schemas, ...)
//! before validators run and hands each result over as a [`Connection`]. A
//! connection is addressed by its [`Namespace`] plus a context map whose key
//! depends on the namespace.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value;

/// HTTP status the host reports when the user lacks access.
pub const FORBIDDEN_STATUS: u16 = 403;

/// Kind of lookup a connection represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
    /// Edge configuration (datastream), keyed by `combinedId`.
    #[serde(rename = "dev1")]
    EdgeConfig,
    /// Launch property, keyed by `propertyId`.
    #[serde(rename = "dev2")]
    LaunchProperty,
    /// App configurations for a company, keyed by `companyId`.
    #[serde(rename = "dev3")]
    AppConfigurations,
    /// XDM schema, keyed by `schemaUrl`.
    #[serde(rename = "dev4")]
    Schema,
    /// Dataset, keyed by `datasetId`.
    #[serde(rename = "dev5")]
    Dataset,
    /// Profile, keyed by `ecid`.
    #[serde(rename = "dev6")]
    Profile,
    /// Any namespace no validator consumes.
    #[serde(other)]
    Other,
}

impl Namespace {
    /// Context key the host uses to address lookups in this namespace.
    pub fn context_key(self) -> Option<&'static str> {
        match self {
            Self::EdgeConfig => Some("combinedId"),
            Self::LaunchProperty => Some("propertyId"),
            Self::AppConfigurations => Some("companyId"),
            Self::Schema => Some("schemaUrl"),
            Self::Dataset => Some("datasetId"),
            Self::Profile => Some("ecid"),
            Self::Other => None,
        }
    }
}

/// Failure reported by the host for a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionError {
    /// HTTP status, when the host supplied one.
    pub status: Option<u16>,
}

impl ConnectionError {
    /// Whether the failure was an access denial.
    pub fn is_forbidden(&self) -> bool {
        self.status == Some(FORBIDDEN_STATUS)
    }
}

/// Resolution state of a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    /// Requested but not yet resolved.
    Loading,
    /// The lookup failed.
    Failed(ConnectionError),
    /// The lookup resolved with data.
    Loaded(Value),
    /// Not requested yet; ignored by validators.
    Idle,
}

/// A pre-resolved lookup handed to validators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawConnection")]
pub struct Connection {
    /// Lookup kind.
    pub namespace: Namespace,
    /// Addressing context.
    pub context: Map<String, Value>,
    /// Resolution state.
    pub state: ConnectionState,
}

impl Connection {
    /// Build a connection in the given state, addressed by a single context value.
    pub fn new(namespace: Namespace, key_value: &str, state: ConnectionState) -> Self {
        let mut context = Map::new();
        if let Some(key) = namespace.context_key() {
            context.insert(key.to_owned(), Value::String(key_value.to_owned()));
        }
        Self {
            namespace,
            context,
            state,
        }
    }

    /// Value of the namespace's addressing key in the context.
    pub fn key(&self) -> Option<&str> {
        let key = self.namespace.context_key()?;
        self.context.get(key).and_then(Value::as_str)
    }

    /// Whether this connection belongs to `namespace` and is addressed by `key_value`.
    pub fn addresses(&self, namespace: Namespace, key_value: &str) -> bool {
        self.namespace == namespace && self.key() == Some(key_value)
    }

    /// Loaded data, if the lookup resolved.
    pub fn data(&self) -> Option<&Value> {
        match &self.state {
            ConnectionState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Host wire shape: boolean flags plus optional data.
#[derive(Debug, Deserialize)]
struct RawConnection {
    namespace: Namespace,
    #[serde(default)]
    context: Map<String, Value>,
    #[serde(default)]
    loading: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    loaded: Option<Value>,
    #[serde(default)]
    data: Option<Value>,
}

impl From<RawConnection> for Connection {
    fn from(raw: RawConnection) -> Self {
        let flag = |v: &Option<Value>| v.as_ref().is_some_and(value::is_truthy);

        let state = if flag(&raw.loading) {
            ConnectionState::Loading
        } else if flag(&raw.error) {
            ConnectionState::Failed(parse_error(raw.error.as_ref()))
        } else if flag(&raw.loaded) {
            let data = raw.data.unwrap_or(Value::Null);
            if data.is_null() {
                tracing::warn!(namespace = ?raw.namespace, "loaded connection carries no data");
            }
            ConnectionState::Loaded(data)
        } else {
            ConnectionState::Idle
        };

        Self {
            namespace: raw.namespace,
            context: raw.context,
            state,
        }
    }
}

/// Read the status from `{status}` (or the older `{state}`) error objects.
fn parse_error(error: Option<&Value>) -> ConnectionError {
    let status = error
        .and_then(|e| e.get("status").or_else(|| e.get("state")))
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok());
    ConnectionError { status }
}
