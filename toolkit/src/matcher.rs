//! Event predicates and batch matching.

use std::fmt;

use crate::event::Event;

/// A named predicate over captured events.
///
/// Matchers are cheap values: a single predicate function or a union of
/// other matchers built with [`Matcher::any`].
#[derive(Clone)]
pub enum Matcher {
    /// A single named predicate.
    Predicate {
        /// Label used in logs.
        name: &'static str,
        /// The predicate itself.
        test: fn(&Event) -> bool,
    },
    /// Matches when any inner matcher matches.
    Any(Vec<Matcher>),
}

impl Matcher {
    /// Wrap a predicate function.
    pub const fn new(name: &'static str, test: fn(&Event) -> bool) -> Self {
        Self::Predicate { name, test }
    }

    /// Union of several matchers.
    pub fn any(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        Self::Any(matchers.into_iter().collect())
    }

    /// Whether the event satisfies this matcher.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::Predicate { test, .. } => test(event),
            Self::Any(inner) => inner.iter().any(|m| m.matches(event)),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate { name, .. } => write!(f, "Matcher({name})"),
            Self::Any(inner) => f.debug_tuple("Any").field(inner).finish(),
        }
    }
}

/// Select the events a matcher accepts, preserving batch order.
pub fn match_events<'a>(matcher: &Matcher, events: &'a [Event]) -> Vec<&'a Event> {
    let matched: Vec<&Event> = events.iter().filter(|e| matcher.matches(e)).collect();
    tracing::trace!(matcher = ?matcher, matched = matched.len(), "matched events");
    matched
}
