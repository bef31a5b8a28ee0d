//! `share` / `unshare`
//!
//! The collaborator email is asked for once, after the selection is known
//! to be valid, and reused for every app.

use crate::domain::ports::required_answer;
use crate::domain::value_objects::Selection;
use crate::error::FleetResult;

use super::CommandContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sharing {
    Add,
    Remove,
}

impl Sharing {
    fn subcommand(self) -> &'static str {
        match self {
            Sharing::Add => "sharing:add",
            Sharing::Remove => "sharing:remove",
        }
    }

    fn question(self) -> &'static str {
        match self {
            Sharing::Add => "Email address of collaborator to add",
            Sharing::Remove => "Email address of collaborator to remove",
        }
    }
}

pub fn cmd_sharing(ctx: &CommandContext<'_>, selection: Selection, action: Sharing) -> FleetResult<()> {
    let dispatcher = ctx.dispatcher();
    let targets = dispatcher.resolve(selection)?;

    let email = match ctx.email {
        Some(email) => required_answer(email)?,
        None => ctx.prompt.ask(action.question())?,
    };

    dispatcher.for_each_target(&targets, |target| {
        ctx.runner.run(
            &ctx.platform()
                .args([action.subcommand(), "--app", target.app()])
                .arg(&email),
        )
    })
}
