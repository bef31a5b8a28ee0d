//! Deploy and force deploy
//!
//! Per target: push the current branch to the deploy ref, migrate, restart.
//! The chain stops at the first failing step.

use crate::domain::entities::Target;
use crate::domain::ports::{CommandLine, FleetEventSinkExt};
use crate::domain::value_objects::Selection;
use crate::error::{FleetError, FleetResult};
use crate::infrastructure::scrape;

use super::platform::{migrate_command, restart_command};
use super::CommandContext;

pub fn cmd_deploy(ctx: &CommandContext<'_>, selection: Selection, force: bool) -> FleetResult<()> {
    ctx.hooks.before_deploy(ctx.runner)?;

    ctx.dispatcher()
        .for_each_selected(selection, |target| deploy_target(ctx, target, force))?;

    ctx.hooks.after_deploy(ctx.runner)
}

fn deploy_target(ctx: &CommandContext<'_>, target: &Target, force: bool) -> FleetResult<()> {
    let branch = current_branch(ctx).ok_or(FleetError::NoBranchDetermined)?;

    ctx.runner.run_chain(&[
        push_command(ctx, target, &branch, force),
        migrate_command(ctx, target),
        restart_command(ctx, target),
    ])
}

/// `git push <repo> [--force] <branch>:<deploy_ref>`
fn push_command(ctx: &CommandContext<'_>, target: &Target, branch: &str, force: bool) -> CommandLine {
    let mut push = CommandLine::new("git").args(["push", target.repo()]);
    if force {
        push = push.arg("--force");
    }
    push.arg(format!("{}:{}", branch, ctx.config.platform.deploy_ref))
}

/// A failing `git branch` counts as no branch.
fn current_branch(ctx: &CommandContext<'_>) -> Option<String> {
    match ctx.runner.capture(&CommandLine::new("git").arg("branch")) {
        Ok(output) => scrape::current_branch(&output),
        Err(err) => {
            ctx.events.debug(format!("git branch failed: {}", err));
            None
        }
    }
}
