//! System Command Runner
//!
//! Runs commands with `std::process::Command`, echoing each one through the
//! event sink first.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::ports::{CommandLine, CommandRunner, FleetEvent, FleetEventSink};
use crate::error::{FleetError, FleetResult};

pub struct SystemRunner<'a> {
    events: &'a dyn FleetEventSink,
    dry_run: bool,
    /// Send child stdout to our stderr (keeps stdout clean for NDJSON)
    stdout_to_stderr: bool,
}

impl<'a> SystemRunner<'a> {
    pub fn new(events: &'a dyn FleetEventSink) -> Self {
        Self {
            events,
            dry_run: false,
            stdout_to_stderr: false,
        }
    }

    /// Echo mutating commands without running them. Captures still run.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn command(command: &CommandLine) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments());
        cmd
    }

    fn child_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }

    fn echo(&self, line: String) {
        self.events.on_event(FleetEvent::Command {
            line,
            dry_run: self.dry_run,
        });
    }
}

fn spawn_error(command: &CommandLine, err: io::Error) -> FleetError {
    FleetError::CommandSpawn {
        program: command.program().to_string(),
        message: err.to_string(),
    }
}

fn check_status(command: &CommandLine, status: ExitStatus) -> FleetResult<()> {
    if status.success() {
        return Ok(());
    }
    Err(FleetError::RemoteCommand {
        command: command.to_string(),
        code: status.code(),
    })
}

impl CommandRunner for SystemRunner<'_> {
    fn run(&self, command: &CommandLine) -> FleetResult<()> {
        self.echo(command.to_string());
        if self.dry_run {
            return Ok(());
        }

        let status = Self::command(command)
            .stdin(Stdio::inherit())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(command, e))?;

        check_status(command, status)
    }

    fn capture(&self, command: &CommandLine) -> FleetResult<String> {
        self.events.on_event(FleetEvent::Debug {
            message: format!("capturing: {}", command),
        });

        let output = Self::command(command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| spawn_error(command, e))?;

        check_status(command, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn query(&self, command: &CommandLine) -> FleetResult<String> {
        self.events.on_event(FleetEvent::Command {
            line: command.to_string(),
            dry_run: false,
        });
        self.capture(command)
    }

    fn pipe(&self, producer: &CommandLine, consumer: &CommandLine) -> FleetResult<()> {
        self.echo(format!("{} | {}", producer, consumer));
        if self.dry_run {
            return Ok(());
        }

        let mut first = Self::command(producer)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| spawn_error(producer, e))?;

        let Some(piped) = first.stdout.take() else {
            let _ = first.kill();
            let _ = first.wait();
            return Err(FleetError::CommandSpawn {
                program: producer.program().to_string(),
                message: "stdout was not captured".to_string(),
            });
        };

        let second = Self::command(consumer)
            .stdin(Stdio::from(piped))
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status();

        let second = match second {
            Ok(status) => status,
            Err(e) => {
                let _ = first.kill();
                let _ = first.wait();
                return Err(spawn_error(consumer, e));
            }
        };

        let first = first.wait()?;
        // A consumer that exits early takes the producer down with SIGPIPE.
        check_status(consumer, second)?;
        check_status(producer, first)
    }
}
