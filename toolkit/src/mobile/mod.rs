//! Accessors for the event shapes the mobile SDK emits.
//!
//! Each submodule exposes a [`crate::Matcher`] for its event kind plus the
//! field accessors validators need.

/// Analytics track and lifecycle events.
pub mod analytics;
/// Configuration response events.
pub mod configuration;
/// Personalization edge requests and responses.
pub mod personalization;
/// Shared state change events.
pub mod shared_state;
/// Event hub shared state listing registered extensions.
pub mod versions;

/// Vendor stamped on every mobile SDK event.
pub const MOBILE_VENDOR: &str = "com.adobe.griffon.mobile";

/// Source used by request events.
pub const SOURCE_REQUEST_CONTENT: &str = "com.adobe.eventsource.requestcontent";
/// Source used by response events.
pub const SOURCE_RESPONSE_CONTENT: &str = "com.adobe.eventsource.responsecontent";
