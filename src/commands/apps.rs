//! `apps` listing and `create_config`

use std::fs;

use crate::domain::ports::{CommandLine, FleetEvent, FleetEventSinkExt};
use crate::domain::value_objects::Selection;
use crate::error::FleetResult;

use super::CommandContext;

/// Bundled example written by `create_config`.
pub const EXAMPLE_CONFIG: &str = include_str!("../../templates/apps.example.yml");

/// Describe every selected app. No remote calls.
pub fn cmd_apps(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    let dispatcher = ctx.dispatcher();
    let targets = dispatcher.resolve(selection)?;

    dispatcher.for_each_target(&targets, |target| {
        ctx.events.on_event(FleetEvent::App {
            name: target.name().to_string(),
            app: target.app().to_string(),
            repo: target.repo().to_string(),
        });
        Ok(())
    })
}

/// Copy the example config into place unless one already exists, then open
/// it in the user's editor when one is configured.
pub fn cmd_create_config(ctx: &CommandContext<'_>) -> FleetResult<()> {
    let path = ctx.config_path;
    if path.exists() {
        ctx.events
            .notice(format!("{} already exists", path.display()));
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, EXAMPLE_CONFIG)?;
    ctx.events
        .notice(format!("Copied example config to {}", path.display()));

    if let Some(editor) = ctx.editor.and_then(editor_command) {
        ctx.runner.run(&editor.arg(path.display().to_string()))?;
    }
    Ok(())
}

/// `$EDITOR` may carry flags (`code -w`).
fn editor_command(editor: &str) -> Option<CommandLine> {
    let words = shlex::split(editor)?;
    CommandLine::from_argv(&words)
}
