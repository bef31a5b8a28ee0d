//! Prompt Port
//!
//! Blocking questions asked of the person running the command.

use crate::error::{FleetError, FleetResult};

pub trait Prompt {
    /// Ask a question and return the trimmed answer.
    fn ask(&self, question: &str) -> FleetResult<String>;
}

/// Trim an answer, whether typed or passed as a flag. Blank is an error.
pub fn required_answer(answer: &str) -> FleetResult<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(FleetError::Prompt("an answer is required".to_string()));
    }
    Ok(answer.to_string())
}
