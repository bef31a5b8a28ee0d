//! Fleet Event Port
//!
//! Everything a command reports to the user goes through here, so the same
//! commands drive a terminal or an NDJSON stream.

/// Event emitted while selecting targets and running commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetEvent {
    /// The only configured app was selected implicitly
    Defaulted { name: String },

    /// A command is about to run (or would run, in dry-run mode)
    Command { line: String, dry_run: bool },

    /// Informational message
    Notice { message: String },

    /// Diagnostic detail, shown with `-v`
    Debug { message: String },

    /// One line of the `apps` listing
    App {
        name: String,
        app: String,
        repo: String,
    },

    /// A batch finished for every selected target
    BatchCompleted { count: usize },
}

/// Trait for receiving fleet events
///
/// Implementations:
/// - ConsoleEventSink: plain terminal output
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait FleetEventSink {
    fn on_event(&self, event: FleetEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl FleetEventSink for NoopEventSink {
    fn on_event(&self, _event: FleetEvent) {}
}

/// Convenience helpers usable through `&dyn FleetEventSink`
pub trait FleetEventSinkExt {
    fn notice(&self, message: impl Into<String>);
    fn debug(&self, message: impl Into<String>);
}

impl FleetEventSinkExt for dyn FleetEventSink + '_ {
    fn notice(&self, message: impl Into<String>) {
        self.on_event(FleetEvent::Notice {
            message: message.into(),
        });
    }

    fn debug(&self, message: impl Into<String>) {
        self.on_event(FleetEvent::Debug {
            message: message.into(),
        });
    }
}
