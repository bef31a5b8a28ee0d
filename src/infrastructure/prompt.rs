//! Terminal Prompt
//!
//! Uses dialoguer on an interactive terminal and a plain line read otherwise,
//! so answers can be piped in.

use std::io::{self, BufRead, Write};

use is_terminal::IsTerminal;

use crate::domain::ports::{required_answer, Prompt};
use crate::error::{FleetError, FleetResult};

pub struct TerminalPrompt;

impl TerminalPrompt {
    fn read_line(question: &str) -> FleetResult<String> {
        eprint!("{}: ", question);
        let _ = io::stderr().flush();

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| FleetError::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(FleetError::Prompt("no input on stdin".to_string()));
        }
        Ok(input)
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&self, question: &str) -> FleetResult<String> {
        let answer = if io::stdin().is_terminal() && io::stderr().is_terminal() {
            dialoguer::Input::<String>::new()
                .with_prompt(question)
                .interact_text()
                .map_err(|e| FleetError::Prompt(e.to_string()))?
        } else {
            Self::read_line(question)?
        };

        required_answer(&answer)
    }
}
