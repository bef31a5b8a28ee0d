//! Command Catalog
//!
//! Each command is a per-target action handed to the dispatcher. Handlers
//! only build argument lists; the runner does the echoing and executing.

pub mod apps;
pub mod db;
pub mod deploy;
pub mod env;
pub mod platform;
pub mod sharing;
pub mod stack;

use std::path::Path;

use crate::config::{closest_match, Config};
use crate::domain::entities::Registry;
use crate::domain::ports::{CommandLine, CommandRunner, DeployHooks, FleetEventSink, Prompt};
use crate::domain::services::Dispatcher;
use crate::domain::value_objects::Selection;
use crate::error::{FleetError, FleetResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetCommand {
    Create,
    Deploy,
    ForceDeploy,
    Restart,
    Migrate,
    Share,
    Unshare,
    RackEnv,
    StackMigrate,
    ConfigUpsert,
    DbPull,
    Remotes,
    Capture,
    Console,
    Apps,
    CreateConfig,
}

impl FleetCommand {
    pub const ALL: [FleetCommand; 16] = [
        FleetCommand::Create,
        FleetCommand::Deploy,
        FleetCommand::ForceDeploy,
        FleetCommand::Restart,
        FleetCommand::Migrate,
        FleetCommand::Share,
        FleetCommand::Unshare,
        FleetCommand::RackEnv,
        FleetCommand::StackMigrate,
        FleetCommand::ConfigUpsert,
        FleetCommand::DbPull,
        FleetCommand::Remotes,
        FleetCommand::Capture,
        FleetCommand::Console,
        FleetCommand::Apps,
        FleetCommand::CreateConfig,
    ];

    /// Parse a command token.
    ///
    /// A leading `heroku:` namespace is accepted, as are dashes in place of
    /// underscores (`force-deploy`).
    pub fn parse(token: &str) -> FleetResult<Self> {
        let normalized = token.strip_prefix("heroku:").unwrap_or(token).replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|command| command.token() == normalized)
            .ok_or_else(|| FleetError::UnknownCommand {
                token: token.to_string(),
            })
    }

    pub fn token(self) -> &'static str {
        match self {
            FleetCommand::Create => "create",
            FleetCommand::Deploy => "deploy",
            FleetCommand::ForceDeploy => "force_deploy",
            FleetCommand::Restart => "restart",
            FleetCommand::Migrate => "migrate",
            FleetCommand::Share => "share",
            FleetCommand::Unshare => "unshare",
            FleetCommand::RackEnv => "rack_env",
            FleetCommand::StackMigrate => "stack:migrate",
            FleetCommand::ConfigUpsert => "config:upsert",
            FleetCommand::DbPull => "db:pull",
            FleetCommand::Remotes => "remotes",
            FleetCommand::Capture => "capture",
            FleetCommand::Console => "console",
            FleetCommand::Apps => "apps",
            FleetCommand::CreateConfig => "create_config",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FleetCommand::Create => "Create the platform app",
            FleetCommand::Deploy => "Push the current branch, migrate and restart",
            FleetCommand::ForceDeploy => "Deploy with a forced push",
            FleetCommand::Restart => "Restart remote servers",
            FleetCommand::Migrate => "Migrate and restart remote servers",
            FleetCommand::Share => "Add a collaborator",
            FleetCommand::Unshare => "Remove a collaborator",
            FleetCommand::RackEnv => "Set RACK_ENV to the app name on every app",
            FleetCommand::StackMigrate => "Migrate to the stack set in the config file",
            FleetCommand::ConfigUpsert => "Add env vars listed in the vars file",
            FleetCommand::DbPull => "Load the latest remote database dump locally",
            FleetCommand::Remotes => "Add git remotes for the selected apps",
            FleetCommand::Capture => "Capture a bundle",
            FleetCommand::Console => "Open a remote console",
            FleetCommand::Apps => "List configured apps",
            FleetCommand::CreateConfig => "Write an example config file",
        }
    }

    /// Commands that always run against every configured app.
    pub fn implies_all(self) -> bool {
        matches!(self, FleetCommand::Apps | FleetCommand::RackEnv)
    }

    pub fn needs_selection(self) -> bool {
        !matches!(self, FleetCommand::CreateConfig)
    }

    /// Closest catalog token for a mistyped command.
    pub fn suggest(token: &str) -> Option<&'static str> {
        closest_match(token, Self::ALL.into_iter().map(FleetCommand::token))
    }

    /// Comma-separated list of every token.
    pub fn catalog() -> String {
        Self::ALL
            .into_iter()
            .map(FleetCommand::token)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything a command handler needs, borrowed for one invocation.
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub registry: &'a Registry,
    pub runner: &'a dyn CommandRunner,
    pub events: &'a dyn FleetEventSink,
    pub prompt: &'a dyn Prompt,
    pub hooks: &'a dyn DeployHooks,
    pub config_path: &'a Path,
    pub vars_path: &'a Path,
    pub email: Option<&'a str>,
    pub editor: Option<&'a str>,
}

impl<'a> CommandContext<'a> {
    pub fn dispatcher(&self) -> Dispatcher<'a> {
        Dispatcher::new(self.registry, self.events)
    }

    /// A fresh platform CLI invocation (`heroku ...`).
    pub fn platform(&self) -> CommandLine {
        CommandLine::new(&self.config.platform.cli)
    }
}

/// Run `command` against `selection`.
pub fn execute(
    command: FleetCommand,
    mut selection: Selection,
    ctx: &CommandContext<'_>,
) -> FleetResult<()> {
    if command.implies_all() {
        selection.select_all(ctx.registry);
    }

    match command {
        FleetCommand::Create => platform::cmd_create(ctx, selection),
        FleetCommand::Deploy => deploy::cmd_deploy(ctx, selection, false),
        FleetCommand::ForceDeploy => deploy::cmd_deploy(ctx, selection, true),
        FleetCommand::Restart => platform::cmd_restart(ctx, selection),
        FleetCommand::Migrate => platform::cmd_migrate(ctx, selection),
        FleetCommand::Share => sharing::cmd_sharing(ctx, selection, sharing::Sharing::Add),
        FleetCommand::Unshare => sharing::cmd_sharing(ctx, selection, sharing::Sharing::Remove),
        FleetCommand::RackEnv => env::cmd_rack_env(ctx, selection),
        FleetCommand::StackMigrate => stack::cmd_stack_migrate(ctx, selection),
        FleetCommand::ConfigUpsert => env::cmd_config_upsert(ctx, selection),
        FleetCommand::DbPull => db::cmd_db_pull(ctx, selection),
        FleetCommand::Remotes => platform::cmd_remotes(ctx, selection),
        FleetCommand::Capture => platform::cmd_capture(ctx, selection),
        FleetCommand::Console => platform::cmd_console(ctx, selection),
        FleetCommand::Apps => apps::cmd_apps(ctx, selection),
        FleetCommand::CreateConfig => apps::cmd_create_config(ctx),
    }
}
