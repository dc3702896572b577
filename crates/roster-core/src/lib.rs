//! Tabular data engine for the employee roster.
//!
//! - [`store::RecordStore`] owns the canonical records and applies mutations.
//! - [`query::QueryEngine`] derives filtered, searched, sorted pages.
//! - [`selection::SelectionTracker`] tracks checked rows.
//! - [`aggregate::summarize`] computes dashboard figures.
//! - [`roster::Roster`] wires them together with version-keyed caches.

#![deny(unsafe_code)]

pub mod aggregate;
pub mod query;
pub mod roster;
pub mod selection;
pub mod store;

pub use aggregate::summarize;
pub use query::QueryEngine;
pub use roster::Roster;
pub use selection::SelectionTracker;
pub use store::{RecordSnapshot, RecordStore};
