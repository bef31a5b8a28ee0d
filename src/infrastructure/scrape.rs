//! Output Scraping
//!
//! The only place that knows what external CLIs print. Each function takes
//! raw stdout and extracts one thing; callers never look at the text.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

fn branch_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\* (.+?)\s*$").expect("valid branch regex"))
}

fn config_var_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:=>|:|=)\s*(.*?)\s*$")
            .expect("valid config var regex")
    })
}

/// Current branch from `git branch` output.
///
/// Detached HEAD (`* (HEAD detached at 1a2b3c)`) counts as no branch.
pub fn current_branch(git_branch: &str) -> Option<String> {
    let caps = branch_re().captures(git_branch)?;
    let name = caps.get(1)?.as_str();
    if name.is_empty() || name.starts_with('(') {
        return None;
    }
    Some(name.to_string())
}

/// `KEY => value`, `KEY: value` and `KEY=value` lines from a config listing.
///
/// Header lines such as `=== myapp Config Vars` are ignored.
pub fn config_vars(listing: &str) -> IndexMap<String, String> {
    listing
        .lines()
        .filter_map(|line| {
            let caps = config_var_re().captures(line)?;
            Some((caps[1].to_string(), caps[2].to_string()))
        })
        .collect()
}

/// Snapshot id from a dump listing: first field of the last non-empty line.
pub fn latest_snapshot(listing: &str) -> Option<String> {
    listing
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}

/// Remote names from `git remote` output.
pub fn remote_names(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
