//! Reusable apps files.

pub const DEMO_STAGING: &str = "\
apps:
  demo:
    app: demo-app
  staging:
    app: staging-app
";

pub const SINGLE_APP: &str = "\
apps:
  production:
    app: prod-app
";

pub const WITH_HOOKS: &str = "\
apps:
  demo:
    app: demo-app
hooks:
  before_deploy:
    - [git, fetch]
  after_deploy:
    - [git, tag, deployed]
";

/// Stand-in for the platform CLI: logs its arguments, prints canned output
/// for `config`, and exits with `FAKE_HEROKU_EXIT` when the arguments match
/// `FAKE_HEROKU_FAIL_ON`.
pub const FAKE_HEROKU: &str = r#"#!/bin/sh
echo "heroku $*" >> "$APPFLEET_TEST_LOG"
case "$1" in
  config) printf '%s\n' "${FAKE_HEROKU_CONFIG:-}" ;;
esac
if [ -n "$FAKE_HEROKU_FAIL_ON" ] && [ "$*" = "$FAKE_HEROKU_FAIL_ON" ]; then
  exit "${FAKE_HEROKU_EXIT:-1}"
fi
exit 0
"#;

/// Stand-in for git: logs its arguments and reports `FAKE_GIT_BRANCH`
/// (default `* main`) for `git branch`.
pub const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $*" >> "$APPFLEET_TEST_LOG"
case "$1" in
  branch) printf '%s\n' "${FAKE_GIT_BRANCH-* main}" ;;
  remote) if [ "$#" -eq 1 ]; then printf 'origin\n'; fi ;;
esac
exit 0
"#;
