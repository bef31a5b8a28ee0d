//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_hooks;
pub mod fleet_events;
pub mod prompt;

pub use command_runner::{CommandLine, CommandRunner};
pub use deploy_hooks::{DeployHooks, NoopHooks};
pub use fleet_events::{FleetEvent, FleetEventSink, FleetEventSinkExt, NoopEventSink};
pub use prompt::{required_answer, Prompt};
