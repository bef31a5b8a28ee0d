//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FleetError, FleetResult};

use super::types::Config;

/// Default location of the apps file, relative to the project root
pub const DEFAULT_CONFIG_PATH: &str = "config/apps.yml";

/// Default location of the vars file used by `config:upsert`
pub const DEFAULT_VARS_PATH: &str = "config/vars.yml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolve the apps file: CLI flag, then `APPFLEET_CONFIG`, then the default.
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    resolve_path(flag, "APPFLEET_CONFIG", DEFAULT_CONFIG_PATH)
}

/// Resolve the vars file: CLI flag, then `APPFLEET_VARS`, then the default.
pub fn resolve_vars_path(flag: Option<&Path>) -> PathBuf {
    resolve_path(flag, "APPFLEET_VARS", DEFAULT_VARS_PATH)
}

fn resolve_path(flag: Option<&Path>, env_key: &str, default: &str) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match std::env::var(env_key) {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A missing file is not an error: it yields an empty configuration.
pub fn load_with_warnings(path: &Path) -> FleetResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Ok((with_env_overrides(Config::default()), Vec::new()));
    }

    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FleetResult<(Config, Vec<ConfigWarning>)> {
    // An empty file is valid YAML for "nothing configured".
    if content.trim().is_empty() {
        return Ok((with_env_overrides(Config::default()), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FleetError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (APPFLEET_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // APPFLEET_PLATFORM_CLI
    if let Ok(cli) = std::env::var("APPFLEET_PLATFORM_CLI") {
        if !cli.trim().is_empty() {
            config.platform.cli = cli;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    let pattern = format!("{}:", needle);
    for (i, line) in content.lines().enumerate() {
        if line.trim_start().starts_with(&pattern) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "platform",
        "cli",
        "host",
        "deploy_ref",
        "migrate_task",
        "apps",
        "app",
        "stack",
        "repo",
        "hooks",
        "before_deploy",
        "after_deploy",
        "database",
        "dump_dir",
        "reset",
        "console",
        "after_load",
    ];

    closest_match(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}

/// Closest candidate within an edit distance of 2, if any.
pub fn closest_match<'a>(
    needle: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(needle, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
