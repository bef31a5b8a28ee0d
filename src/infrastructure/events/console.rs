//! Console Event Sink
//!
//! Human-readable output: echoed commands and notices on stdout, debug
//! lines on stderr when verbose.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{FleetEvent, FleetEventSink};
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn new(color: bool, verbose: u8) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), color, verbose)
    }

    pub fn with_writers<O, E>(out: O, err: E, color: bool, verbose: u8) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color,
            verbose,
        }
    }

    fn print(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
            let _ = out.flush();
        }
    }

    fn eprint(&self, text: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", text);
            let _ = err.flush();
        }
    }
}

impl FleetEventSink for ConsoleEventSink {
    fn on_event(&self, event: FleetEvent) {
        match event {
            FleetEvent::Defaulted { name } => {
                self.print(&format!(
                    "Defaulting to {} app since only one app is defined",
                    name
                ));
            }
            FleetEvent::Command { line, dry_run } => {
                let line = if dry_run {
                    format!("[dry-run] {}", line)
                } else {
                    line
                };
                self.print(&ColoredText::info(line).render(self.color));
            }
            FleetEvent::Notice { message } => self.print(&message),
            FleetEvent::Debug { message } => {
                if self.verbose > 0 {
                    self.eprint(&ColoredText::dim(message).render(self.color));
                }
            }
            FleetEvent::App { name, app, repo } => {
                self.print(&format!(
                    "{} is shorthand for the Heroku app {} located at:",
                    ColoredText::plain(name).bold().render(self.color),
                    app
                ));
                self.print(&format!("  {}", repo));
                self.print("");
            }
            FleetEvent::BatchCompleted { .. } => self.print(""),
        }
    }
}
