//! Error types for appfleet
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appfleet operations
pub type FleetResult<T> = Result<T, FleetError>;

/// Main error type for appfleet operations
#[derive(Error, Debug)]
pub enum FleetError {
    /// Configuration file exists but could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// A selector named an app that is not configured
    #[error("unknown app '{name}' (configured apps: {})", known_list(.known))]
    UnknownTarget { name: String, known: Vec<String> },

    /// The final token is not a known command
    #[error("unknown command '{token}'")]
    UnknownCommand { token: String },

    /// Dispatch started with nothing selected and more than one candidate
    #[error("no app selected")]
    NoTargetsSelected,

    /// Deploy could not identify the branch to push
    #[error(
        "Unable to determine the current git branch, please checkout the branch you'd like to deploy"
    )]
    NoBranchDetermined,

    /// An external command exited unsuccessfully
    #[error("command failed{}: {command}", exit_suffix(.code))]
    RemoteCommand { command: String, code: Option<i32> },

    /// An external command could not be started at all
    #[error("failed to run '{program}': {message}")]
    CommandSpawn { program: String, message: String },

    /// `stack:migrate` on an app without a configured stack
    #[error("no stack configured for app '{target}'")]
    MissingStack { target: String },

    /// `db:pull` could not find a snapshot in the listing
    #[error("no database snapshot found for app '{target}'")]
    SnapshotNotFound { target: String },

    /// Reading interactive input failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error outside of config loading
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FleetError {
    /// Process exit status for this error.
    ///
    /// Failing subprocesses hand their own status through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            FleetError::RemoteCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn known_list(known: &[String]) -> String {
    if known.is_empty() {
        "none".to_string()
    } else {
        known.join(", ")
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}
