//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Console and NDJSON event sinks
//! - `process` - Subprocess runner (echo, capture, pipe)
//! - `prompt` - Interactive prompt
//! - `hooks` - Deploy hooks from the apps file
//! - `scrape` - Parsing of external CLI output

pub mod events;
pub mod hooks;
pub mod process;
pub mod prompt;
pub mod scrape;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use hooks::ConfiguredHooks;
pub use process::SystemRunner;
pub use prompt::TerminalPrompt;
