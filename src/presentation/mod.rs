//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Turning positional tokens into a selection plus a command
//!
//! ## Structure
//!
//! - `cli` - clap definitions and global flags
//! - `invocation` - `<app> [<app>] <command>` grammar

pub mod cli;
pub mod invocation;

pub use cli::{Cli, ColorWhen};
pub use invocation::Invocation;
