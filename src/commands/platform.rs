//! Single-call platform commands: create, restart, migrate, capture, console
//! and git remotes.

use crate::domain::entities::Target;
use crate::domain::ports::{CommandLine, FleetEventSinkExt};
use crate::domain::value_objects::Selection;
use crate::error::FleetResult;
use crate::infrastructure::scrape;

use super::CommandContext;

/// `<cli> restart --app <app>`
pub(crate) fn restart_command(ctx: &CommandContext<'_>, target: &Target) -> CommandLine {
    ctx.platform().args(["restart", "--app", target.app()])
}

/// `<cli> rake --app <app> <migrate_task>`
pub(crate) fn migrate_command(ctx: &CommandContext<'_>, target: &Target) -> CommandLine {
    ctx.platform()
        .args(["rake", "--app", target.app()])
        .arg(&ctx.config.platform.migrate_task)
}

fn app_command(ctx: &CommandContext<'_>, subcommand: &str, target: &Target) -> CommandLine {
    ctx.platform().args([subcommand, "--app", target.app()])
}

pub fn cmd_create(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        ctx.runner
            .run(&ctx.platform().args(["create", target.app()]))
    })
}

pub fn cmd_restart(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        ctx.runner.run(&restart_command(ctx, target))
    })
}

pub fn cmd_migrate(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        ctx.runner
            .run_chain(&[migrate_command(ctx, target), restart_command(ctx, target)])
    })
}

pub fn cmd_capture(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        ctx.runner.run(&app_command(ctx, "bundles:capture", target))
    })
}

pub fn cmd_console(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        ctx.runner.run(&app_command(ctx, "console", target))
    })
}

/// `git remote add <name> <repo>` for each target, skipping existing remotes.
pub fn cmd_remotes(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    let dispatcher = ctx.dispatcher();
    let targets = dispatcher.resolve(selection)?;

    let existing = scrape::remote_names(&ctx.runner.capture(&CommandLine::new("git").arg("remote"))?);

    dispatcher.for_each_target(&targets, |target| {
        if existing.iter().any(|name| name == target.name()) {
            ctx.events
                .notice(format!("Remote {} already exists, skipping", target.name()));
            return Ok(());
        }
        ctx.runner.run(
            &CommandLine::new("git").args(["remote", "add", target.name(), target.repo()]),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use crate::domain::entities::Registry;
    use crate::error::FleetError;
    use crate::testing::{RecordingRunner, RecordingSink, ScriptedPrompt};

    #[test]
    fn create_uses_app_identifier() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new();
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        cmd_create(&ctx, select(&registry, &["staging", "demo"])).unwrap();

        assert_eq!(
            runner.executed(),
            vec!["heroku create staging-app", "heroku create demo-app"]
        );
    }

    #[test]
    fn migrate_runs_rake_then_restart() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new();
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        cmd_migrate(&ctx, select(&registry, &["demo"])).unwrap();

        assert_eq!(
            runner.executed(),
            vec![
                "heroku rake --app demo-app db:migrate",
                "heroku restart --app demo-app"
            ]
        );
    }

    #[test]
    fn failed_migration_skips_restart_and_later_apps() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner =
            RecordingRunner::new().failing("heroku rake --app demo-app db:migrate", 1);
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        let err = cmd_migrate(&ctx, select(&registry, &["demo", "staging"])).unwrap_err();

        assert!(matches!(err, FleetError::RemoteCommand { code: Some(1), .. }));
        assert_eq!(
            runner.executed(),
            vec!["heroku rake --app demo-app db:migrate"]
        );
    }

    #[test]
    fn custom_platform_cli_and_migrate_task_are_used() {
        let config = config(
            "platform:\n  cli: dokku\n  migrate_task: db:migrate:with_data\napps:\n  demo:\n    app: demo-app\n",
        );
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new();
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        cmd_migrate(&ctx, Selection::new()).unwrap();

        assert_eq!(
            runner.executed(),
            vec![
                "dokku rake --app demo-app db:migrate:with_data",
                "dokku restart --app demo-app"
            ]
        );
    }

    #[test]
    fn capture_and_console_target_each_app() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new();
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        cmd_capture(&ctx, select(&registry, &["demo"])).unwrap();
        cmd_console(&ctx, select(&registry, &["staging"])).unwrap();

        assert_eq!(
            runner.executed(),
            vec![
                "heroku bundles:capture --app demo-app",
                "heroku console --app staging-app"
            ]
        );
    }

    #[test]
    fn remotes_skips_existing_names() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new().with_output("git remote", "origin\ndemo\n");
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        cmd_remotes(&ctx, select(&registry, &["demo", "staging"])).unwrap();

        assert_eq!(
            runner.executed(),
            vec!["git remote add staging git@heroku.com:staging-app.git"]
        );
        assert_eq!(sink.notices(), vec!["Remote demo already exists, skipping"]);
    }
}
