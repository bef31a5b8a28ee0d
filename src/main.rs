//! appfleet CLI
//!
//! Usage: appfleet [OPTIONS] <app> [<app> ...] <command>
//!
//! Examples:
//!   appfleet production restart
//!   appfleet demo staging deploy
//!   appfleet all share

use anyhow::Result;
use clap::Parser;

use appfleet::config::{self, Config};
use appfleet::domain::ports::{FleetEventSink, FleetEventSinkExt};
use appfleet::infrastructure::{
    ConfiguredHooks, ConsoleEventSink, JsonEventSink, SystemRunner, TerminalPrompt,
};
use appfleet::ui::{self, UiContext};
use appfleet::{execute, Cli, CommandContext, FleetError, Invocation, Registry, Selection};

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    if let Err(err) = run(&cli, &ui) {
        ui::error::print_error(&err, &ui);
        let code = err
            .downcast_ref::<FleetError>()
            .map(FleetError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let invocation = Invocation::parse(&cli.tokens)?;
    let command = invocation.command;

    let config_path = config::resolve_config_path(cli.config.as_deref());
    let vars_path = config::resolve_vars_path(cli.vars.as_deref());

    // create_config must work even when the existing file is broken.
    let (config, warnings) = if command.needs_selection() {
        Config::load_with_warnings(&config_path)?
    } else {
        (config::with_env_overrides(Config::default()), Vec::new())
    };
    ui::error::print_config_warnings(&warnings, ui);

    let registry = Registry::from_config(&config);
    let selection = if command.needs_selection() {
        invocation.selection(&registry)?
    } else {
        Selection::new()
    };

    let events: Box<dyn FleetEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout(ui.verbose > 0))
    } else {
        Box::new(ConsoleEventSink::new(ui.color, ui.verbose))
    };
    let events = events.as_ref();
    events.debug(format!("config: {}", config_path.display()));

    let runner = SystemRunner::new(events)
        .dry_run(cli.dry_run)
        .stdout_to_stderr(ui.json);
    let hooks = ConfiguredHooks::from_config(&config.hooks);
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .ok()
        .filter(|e| !e.trim().is_empty());

    let ctx = CommandContext {
        config: &config,
        registry: &registry,
        runner: &runner,
        events,
        prompt: &TerminalPrompt,
        hooks: &hooks,
        config_path: &config_path,
        vars_path: &vars_path,
        email: cli.email.as_deref(),
        editor: editor.as_deref(),
    };

    execute(command, selection, &ctx)?;
    Ok(())
}
