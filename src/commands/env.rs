//! Environment variable commands: `rack_env` and `config:upsert`.

use crate::config::VarsFile;
use crate::domain::entities::Target;
use crate::domain::ports::FleetEventSinkExt;
use crate::domain::value_objects::Selection;
use crate::error::FleetResult;
use crate::infrastructure::scrape;

use super::CommandContext;

/// Set `RACK_ENV=<name>` wherever the remote value differs from the app name.
pub fn cmd_rack_env(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        let listing = ctx
            .runner
            .query(&ctx.platform().args(["config", "--app", target.app()]))?;
        let vars = scrape::config_vars(&listing);

        if vars.get("RACK_ENV").map(String::as_str) == Some(target.name()) {
            return Ok(());
        }

        ctx.runner.run(
            &ctx.platform()
                .args(["config:add", "--app", target.app()])
                .arg(format!("RACK_ENV={}", target.name())),
        )
    })
}

/// Push the vars file entries for each target in one `config:add` call.
pub fn cmd_config_upsert(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    let dispatcher = ctx.dispatcher();
    let targets = dispatcher.resolve(selection)?;
    let vars = VarsFile::load(ctx.vars_path)?;

    if vars.is_none() {
        ctx.events
            .debug(format!("no vars file at {}", ctx.vars_path.display()));
    }

    dispatcher.for_each_target(&targets, |target| upsert_target(ctx, vars.as_ref(), target))
}

fn upsert_target(ctx: &CommandContext<'_>, vars: Option<&VarsFile>, target: &Target) -> FleetResult<()> {
    let pairs = vars
        .and_then(|vars| vars.pairs_for(target.name()))
        .unwrap_or_default();

    if pairs.is_empty() {
        ctx.events.notice(format!(
            "You must first specify config vars for the {} app",
            target.name()
        ));
        return Ok(());
    }

    let command = ctx
        .platform()
        .arg("config:add")
        .args(pairs.iter().map(|(key, value)| format!("{}={}", key, value)))
        .args(["--app", target.app()]);

    ctx.runner.run(&command)
}
