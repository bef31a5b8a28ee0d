//! Deploy Hooks Port
//!
//! Extension points around the `deploy` batch. Both default to doing nothing;
//! implementors override only the side they need.

use crate::error::FleetResult;

use super::command_runner::CommandRunner;

pub trait DeployHooks {
    /// Runs once before any target is deployed.
    fn before_deploy(&self, _runner: &dyn CommandRunner) -> FleetResult<()> {
        Ok(())
    }

    /// Runs once after every selected target deployed successfully.
    fn after_deploy(&self, _runner: &dyn CommandRunner) -> FleetResult<()> {
        Ok(())
    }
}

/// Hooks that do nothing
pub struct NoopHooks;

impl DeployHooks for NoopHooks {}
