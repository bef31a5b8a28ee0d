//! appfleet - deploy tasks across a selection of platform apps
//!
//! A project names its deployment targets in `config/apps.yml`. Each
//! invocation selects some of them and applies one command to each in turn:
//! push and migrate, restart, sync env vars, pull the database and so on.
//! Every remote effect is an external program (`heroku`, `git`, `wget`).

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use commands::{execute, CommandContext, FleetCommand};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Registry, Target};
pub use domain::value_objects::Selection;
pub use error::{FleetError, FleetResult};
pub use presentation::{Cli, ColorWhen, Invocation};
