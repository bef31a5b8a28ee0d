//! `db:pull`
//!
//! Capture a remote dump, download it, and load it into the local database.

use std::path::PathBuf;

use crate::domain::entities::Target;
use crate::domain::ports::CommandLine;
use crate::domain::value_objects::Selection;
use crate::error::{FleetError, FleetResult};
use crate::infrastructure::scrape;

use super::CommandContext;

pub fn cmd_db_pull(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher()
        .for_each_selected(selection, |target| pull_target(ctx, target))
}

fn pull_target(ctx: &CommandContext<'_>, target: &Target) -> FleetResult<()> {
    let database = &ctx.config.database;

    ctx.runner
        .run(&ctx.platform().args(["pgdumps:capture", "--app", target.app()]))?;

    let listing = ctx
        .runner
        .capture(&ctx.platform().args(["pgdumps", "--app", target.app()]))?;
    let dump = scrape::latest_snapshot(&listing).ok_or_else(|| FleetError::SnapshotNotFound {
        target: target.name().to_string(),
    })?;

    let url = ctx
        .runner
        .capture(&ctx.platform().args(["pgdumps:url", "--app", target.app(), dump.as_str()]))?
        .trim()
        .to_string();

    let file = dump_file(&database.dump_dir, &dump);
    let file_arg = file.display().to_string();

    ctx.runner.run(
        &CommandLine::new("mkdir")
            .arg("-p")
            .arg(database.dump_dir.display().to_string()),
    )?;
    ctx.runner
        .run(&CommandLine::new("wget").args([url.as_str(), "-O", file_arg.as_str()]))?;

    for reset in database.reset.iter().filter_map(|argv| CommandLine::from_argv(argv)) {
        ctx.runner.run(&reset)?;
    }

    if let Some(console) = CommandLine::from_argv(&database.console) {
        ctx.runner.pipe(
            &CommandLine::new("gunzip").args(["-c", file_arg.as_str()]),
            &console,
        )?;
    }

    for after in database
        .after_load
        .iter()
        .filter_map(|argv| CommandLine::from_argv(argv))
    {
        ctx.runner.run(&after)?;
    }

    Ok(())
}

fn dump_file(dir: &std::path::Path, dump: &str) -> PathBuf {
    dir.join(format!("{}.sql.gz", dump))
}
