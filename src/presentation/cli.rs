//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The command line is a list of tokens: app selectors followed by one command
//! - Global flags may appear anywhere on the line

use std::path::PathBuf;

use clap::Parser;

use crate::commands::FleetCommand;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// appfleet - run deploy tasks across a selection of platform apps
#[derive(Parser, Debug)]
#[command(name = "appfleet")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = commands_help())]
pub struct Cli {
    /// App names (or `all`) followed by a command, e.g. `demo staging deploy`
    #[arg(value_name = "APP|all ... COMMAND", required = true, num_args = 1..)]
    pub tokens: Vec<String>,

    /// Apps file [default: config/apps.yml, env: APPFLEET_CONFIG]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Vars file for config:upsert [default: config/vars.yml, env: APPFLEET_VARS]
    #[arg(long, value_name = "PATH")]
    pub vars: Option<PathBuf>,

    /// Collaborator email for share/unshare (skips the prompt)
    #[arg(long)]
    pub email: Option<String>,

    /// Echo mutating commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn commands_help() -> String {
    let mut help = String::from("Commands:\n");
    for command in FleetCommand::ALL {
        help.push_str(&format!(
            "  {:<15} {}\n",
            command.token(),
            command.description()
        ));
    }
    help.push_str("\nExamples:\n");
    help.push_str("  appfleet production restart\n");
    help.push_str("  appfleet demo staging deploy\n");
    help.push_str("  appfleet all share");
    help
}
