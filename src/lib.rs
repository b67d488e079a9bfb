//! Assurance validators: rules that inspect a captured mobile SDK session.
//!
//! A validator receives the session's events, its settings, and the lookups
//! the host performed against backend services, and returns a [`Verdict`].
//! Validators never fetch anything and never fail: a missing lookup is a
//! `loading` or `unknown` verdict, a problem is a `not matched` verdict.
//!
//! See `DESIGN.md` for how each piece fits together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checklist;
pub mod clients;
pub mod config;
pub mod links;
pub mod logging;
pub mod report;
pub mod validator;
pub mod validators;
pub mod verdict;

pub use validator::{Settings, Validator};
pub use verdict::{Link, Outcome, Verdict};
