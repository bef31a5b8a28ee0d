//! Test doubles for the domain ports.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::domain::ports::{CommandLine, CommandRunner, FleetEvent, FleetEventSink, Prompt};
use crate::error::{FleetError, FleetResult};

/// Collects events in memory
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<FleetEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<FleetEvent> {
        self.events.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                FleetEvent::Notice { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl FleetEventSink for RecordingSink {
    fn on_event(&self, event: FleetEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Records executed commands and answers captures from canned output.
///
/// Executed commands are stored in their echoed form; a pipe is stored as
/// `producer | consumer`.
#[derive(Default)]
pub struct RecordingRunner {
    executed: RefCell<Vec<String>>,
    captured: RefCell<Vec<String>>,
    outputs: HashMap<String, String>,
    failures: HashMap<String, i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `capture(command)` with `stdout`.
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), stdout.to_string());
        self
    }

    /// Make `command` exit with `code`.
    pub fn failing(mut self, command: &str, code: i32) -> Self {
        self.failures.insert(command.to_string(), code);
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub fn captured(&self) -> Vec<String> {
        self.captured.borrow().clone()
    }

    fn check(&self, line: &str) -> FleetResult<()> {
        match self.failures.get(line) {
            Some(code) => Err(FleetError::RemoteCommand {
                command: line.to_string(),
                code: Some(*code),
            }),
            None => Ok(()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine) -> FleetResult<()> {
        let line = command.to_string();
        self.executed.borrow_mut().push(line.clone());
        self.check(&line)
    }

    fn capture(&self, command: &CommandLine) -> FleetResult<String> {
        let line = command.to_string();
        self.captured.borrow_mut().push(line.clone());
        self.check(&line)?;
        Ok(self.outputs.get(&line).cloned().unwrap_or_default())
    }

    fn pipe(&self, producer: &CommandLine, consumer: &CommandLine) -> FleetResult<()> {
        let line = format!("{} | {}", producer, consumer);
        self.executed.borrow_mut().push(line.clone());
        self.check(&line)
    }
}

/// Answers prompts from a fixed list
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, question: &str) -> FleetResult<String> {
        self.asked.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| FleetError::Prompt("no answer scripted".to_string()))
    }
}
