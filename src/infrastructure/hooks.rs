//! Configured Deploy Hooks
//!
//! Runs the `hooks.before_deploy` / `hooks.after_deploy` command lists from
//! the apps file.

use crate::config::HooksConfig;
use crate::domain::ports::{CommandLine, CommandRunner, DeployHooks};
use crate::error::FleetResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredHooks {
    before: Vec<CommandLine>,
    after: Vec<CommandLine>,
}

impl ConfiguredHooks {
    /// Empty argv entries are dropped.
    pub fn from_config(hooks: &HooksConfig) -> Self {
        Self {
            before: hooks
                .before_deploy
                .iter()
                .filter_map(|argv| CommandLine::from_argv(argv))
                .collect(),
            after: hooks
                .after_deploy
                .iter()
                .filter_map(|argv| CommandLine::from_argv(argv))
                .collect(),
        }
    }
}

impl DeployHooks for ConfiguredHooks {
    fn before_deploy(&self, runner: &dyn CommandRunner) -> FleetResult<()> {
        runner.run_chain(&self.before)
    }

    fn after_deploy(&self, runner: &dyn CommandRunner) -> FleetResult<()> {
        runner.run_chain(&self.after)
    }
}
