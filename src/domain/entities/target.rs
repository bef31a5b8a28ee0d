//! Target entity
//!
//! One configured deployment target: a short local name bound to a remote
//! platform app and its git repository.

use crate::config::AppEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    app: String,
    repo: String,
    stack: Option<String>,
}

impl Target {
    /// Create a target whose repository URL is derived from `host`.
    pub fn new(name: impl Into<String>, app: impl Into<String>, host: &str) -> Self {
        let app = app.into();
        Self {
            name: name.into(),
            repo: repo_url(host, &app),
            app,
            stack: None,
        }
    }

    /// Build a target from an `apps` entry.
    pub fn from_entry(name: &str, entry: &AppEntry, host: &str) -> Self {
        let mut target = Self::new(name, entry.app.clone(), host);
        if let Some(repo) = &entry.repo {
            target.repo = repo.clone();
        }
        target.stack = entry.stack.clone();
        target
    }

    /// Local name used on the command line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote app identifier on the platform
    pub fn app(&self) -> &str {
        &self.app
    }

    /// Git repository URL deploys push to
    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

/// `git@<host>:<app>.git`
pub fn repo_url(host: &str, app: &str) -> String {
    format!("git@{}:{}.git", host, app)
}
