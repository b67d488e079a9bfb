//! Captured session files.
//!
//! A session is either a JSON document `{events, connections, settings}` or a
//! JSONL stream with one event per line. Synchronous `std::fs` reads are used
//! since sessions are small local files.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::connection::Connection;
use crate::error::ToolkitError;
use crate::event::Event;

/// Lines longer than this are skipped when reading JSONL.
const MAX_LINE_LEN: usize = 1_048_576;

/// Everything a validator run receives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    /// Captured events, newest first.
    #[serde(default)]
    pub events: Vec<Event>,

    /// Pre-resolved lookups.
    #[serde(default)]
    pub connections: Vec<Connection>,

    /// Host settings forwarded to validators.
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl Session {
    /// Load a session from a JSON document or a JSONL event stream.
    ///
    /// Files ending in `.jsonl` are read line by line; anything else must be a
    /// session document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a JSON document fails
    /// to parse.
    pub fn load(path: &Path) -> Result<Self, ToolkitError> {
        let read_error = |source| ToolkitError::Read {
            path: path.to_path_buf(),
            source,
        };

        let is_jsonl = path.extension().and_then(|ext| ext.to_str()) == Some("jsonl");
        let session = if is_jsonl {
            let file = fs::File::open(path).map_err(read_error)?;
            Self::read_jsonl(BufReader::new(file)).map_err(read_error)?
        } else {
            let contents = fs::read_to_string(path).map_err(read_error)?;
            serde_json::from_str(&contents).map_err(|source| ToolkitError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        debug!(
            path = %path.display(),
            events = session.events.len(),
            connections = session.connections.len(),
            "session loaded"
        );
        Ok(session)
    }

    /// Read a JSONL event stream line by line.
    ///
    /// Blank, oversized, non-UTF-8, and unparsable lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying reader fails.
    pub fn read_jsonl(mut reader: impl BufRead) -> io::Result<Self> {
        let mut events = Vec::new();
        let mut line = Vec::new();
        let mut skipped = 0_usize;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.len() > MAX_LINE_LEN {
                skipped = skipped.saturating_add(1);
                continue;
            }
            let Ok(text) = std::str::from_utf8(&line) else {
                skipped = skipped.saturating_add(1);
                continue;
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<Event>(trimmed) {
                Ok(event) => events.push(event),
                Err(_) => skipped = skipped.saturating_add(1),
            }
        }

        if skipped > 0 {
            debug!(skipped, "skipped unreadable session lines");
        }
        Ok(Self {
            events,
            ..Self::default()
        })
    }

    /// Parse an in-memory JSONL event stream. Same skipping rules as
    /// [`Session::read_jsonl`].
    pub fn from_jsonl(contents: &str) -> Self {
        Self::read_jsonl(contents.as_bytes()).unwrap_or_default()
    }

    /// Order events by descending timestamp. Events without one keep their
    /// relative order after the timestamped ones.
    pub fn newest_first(mut self) -> Self {
        self.events
            .sort_by_key(|e| std::cmp::Reverse(e.timestamp.unwrap_or(i64::MIN)));
        self
    }
}
