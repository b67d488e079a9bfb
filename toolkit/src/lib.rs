//! Host-side primitives the assurance validators are written against.
//!
//! Provides the captured [`event::Event`] model, pre-resolved
//! [`connection::Connection`] lookups, composable [`matcher::Matcher`]s, and
//! accessors for the mobile SDK event shapes (shared state, configuration,
//! analytics, personalization). Nothing here performs I/O except
//! [`session::Session::load`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Pre-resolved network lookups keyed by namespace.
pub mod connection;
/// Toolkit error types.
pub mod error;
/// Captured SDK event model.
pub mod event;
/// Event predicates and batch matching.
pub mod matcher;
/// Builders for synthetic events used in tests and fixtures.
pub mod mock;
/// Accessors for mobile SDK event shapes.
pub mod mobile;
/// Captured session files (events, connections, settings).
pub mod session;
/// JSON value helpers.
pub mod value;

pub use connection::{Connection, ConnectionError, ConnectionState, Namespace};
pub use error::ToolkitError;
pub use event::{Annotation, Event};
pub use matcher::{match_events, Matcher};
pub use session::Session;
