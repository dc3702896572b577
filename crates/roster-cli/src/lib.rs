//! Library components for the roster CLI: logging, configuration, query
//! clause parsing, and table rendering.

pub mod clauses;
pub mod config;
pub mod logging;
pub mod render;
