//! JSON Event Sink
//!
//! Outputs fleet events as NDJSON for CI/automation consumption.

use crate::domain::ports::{FleetEvent, FleetEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            verbose,
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = crate::ui::json::write_event(&mut *writer, &event);
            let _ = writer.flush();
        }
    }
}

impl FleetEventSink for JsonEventSink {
    fn on_event(&self, event: FleetEvent) {
        let json = match event {
            FleetEvent::Defaulted { name } => serde_json::json!({
                "event": "defaulted",
                "app": name,
            }),

            FleetEvent::Command { line, dry_run } => serde_json::json!({
                "event": "command",
                "command": line,
                "dry_run": dry_run,
            }),

            FleetEvent::Notice { message } => serde_json::json!({
                "event": "notice",
                "message": message,
            }),

            FleetEvent::Debug { message } => {
                if !self.verbose {
                    return;
                }
                serde_json::json!({
                    "event": "debug",
                    "message": message,
                })
            }

            FleetEvent::App { name, app, repo } => serde_json::json!({
                "event": "app",
                "name": name,
                "app": app,
                "repo": repo,
            }),

            FleetEvent::BatchCompleted { count } => serde_json::json!({
                "event": "batch_complete",
                "count": count,
            }),
        };

        self.write_event(json);
    }
}
