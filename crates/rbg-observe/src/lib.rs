//! Logging setup for `should-rebuild`.
//!
//! Everything here writes to stderr; stdout carries the verdict line.
mod logger;
pub use logger::*;
