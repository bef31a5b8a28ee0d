//! Event Sink Implementations
//!
//! Provides concrete implementations of FleetEventSink:
//! - ConsoleEventSink: human-readable output
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
