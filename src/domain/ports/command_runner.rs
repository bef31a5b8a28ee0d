//! Command Runner Port
//!
//! Every remote effect is an external program. Commands are argument lists,
//! never shell strings, so nothing is interpolated by a shell.

use std::fmt;

use crate::error::FleetResult;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build from a configured argv. Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

/// Shell-quoted rendering, used when echoing a command before it runs.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in std::iter::once(&self.program).chain(self.args.iter()) {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(&quote_word(word))?;
        }
        Ok(())
    }
}

/// Leave common words (`KEY=value`, `db:migrate`, URLs) bare; quote the rest.
fn quote_word(word: &str) -> std::borrow::Cow<'_, str> {
    let bare = !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '_' | '-' | '.' | ',' | '/' | ':' | '@' | '%' | '+' | '=')
        });
    if bare {
        return word.into();
    }
    shlex::try_quote(word).unwrap_or_else(|_| word.into())
}

/// Executes external commands.
///
/// `run` and `pipe` inherit the terminal and fail with
/// `FleetError::RemoteCommand` on a non-zero exit. `capture` returns stdout.
pub trait CommandRunner {
    /// Echo and run a command.
    fn run(&self, command: &CommandLine) -> FleetResult<()>;

    /// Run a command and return its stdout.
    fn capture(&self, command: &CommandLine) -> FleetResult<String>;

    /// Echo and run `producer | consumer`.
    fn pipe(&self, producer: &CommandLine, consumer: &CommandLine) -> FleetResult<()>;

    /// Echo a read-only command, then capture its stdout.
    ///
    /// Unlike `run`, this executes in dry-run mode too.
    fn query(&self, command: &CommandLine) -> FleetResult<String> {
        self.capture(command)
    }

    /// Run commands in order, stopping at the first failure.
    fn run_chain(&self, commands: &[CommandLine]) -> FleetResult<()> {
        for command in commands {
            self.run(command)?;
        }
        Ok(())
    }
}
