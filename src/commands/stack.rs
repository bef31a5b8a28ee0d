//! `stack:migrate`

use crate::domain::value_objects::Selection;
use crate::error::{FleetError, FleetResult};

use super::CommandContext;

/// `<cli> stack:migrate <stack> --app <app>` using each app's configured stack.
pub fn cmd_stack_migrate(ctx: &CommandContext<'_>, selection: Selection) -> FleetResult<()> {
    ctx.dispatcher().for_each_selected(selection, |target| {
        let stack = target.stack().ok_or_else(|| FleetError::MissingStack {
            target: target.name().to_string(),
        })?;
        ctx.runner
            .run(&ctx.platform().args(["stack:migrate", stack, "--app", target.app()]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use crate::domain::entities::Registry;
    use crate::testing::{RecordingRunner, RecordingSink, ScriptedPrompt};

    #[test]
    fn migrates_to_configured_stack() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new();
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        cmd_stack_migrate(&ctx, select(&registry, &["staging"])).unwrap();

        assert_eq!(
            runner.executed(),
            vec!["heroku stack:migrate heroku-22 --app staging-app"]
        );
    }

    #[test]
    fn app_without_stack_is_an_error() {
        let config = config(DEMO_STAGING);
        let registry = Registry::from_config(&config);
        let runner = RecordingRunner::new();
        let sink = RecordingSink::default();
        let prompt = ScriptedPrompt::new(&[]);
        let ctx = context(&config, &registry, &runner, &sink, &prompt);

        let err = cmd_stack_migrate(&ctx, select(&registry, &["demo", "staging"])).unwrap_err();

        assert!(matches!(err, FleetError::MissingStack { target } if target == "demo"));
        assert!(runner.executed().is_empty());
    }
}
