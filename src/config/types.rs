//! Configuration type definitions

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FleetResult;

use super::loader::{self, ConfigWarning};

/// Platform CLI settings shared by every app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Program invoked for every platform operation
    #[serde(default = "default_cli")]
    pub cli: String,

    /// Git host used to derive each app's repository URL
    #[serde(default = "default_host")]
    pub host: String,

    /// Remote ref that deploys push to
    #[serde(default = "default_deploy_ref")]
    pub deploy_ref: String,

    /// Rake task run remotely by `migrate` and `deploy`
    #[serde(default = "default_migrate_task")]
    pub migrate_task: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            cli: default_cli(),
            host: default_host(),
            deploy_ref: default_deploy_ref(),
            migrate_task: default_migrate_task(),
        }
    }
}

fn default_cli() -> String {
    "heroku".to_string()
}

fn default_host() -> String {
    "heroku.com".to_string()
}

fn default_deploy_ref() -> String {
    "master".to_string()
}

fn default_migrate_task() -> String {
    "db:migrate".to_string()
}

/// One entry of the `apps` mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Remote app identifier on the platform
    pub app: String,

    #[serde(default)]
    pub stack: Option<String>,

    /// Repository URL override; derived from `platform.host` when unset
    #[serde(default)]
    pub repo: Option<String>,
}

/// Commands attached around `deploy`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    #[serde(default)]
    pub before_deploy: Vec<Vec<String>>,

    #[serde(default)]
    pub after_deploy: Vec<Vec<String>>,
}

/// Local database settings used by `db:pull`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_dump_dir")]
    pub dump_dir: PathBuf,

    /// Commands that drop and recreate the local database
    #[serde(default = "default_reset")]
    pub reset: Vec<Vec<String>>,

    /// Command that reads a SQL dump on stdin
    #[serde(default = "default_console")]
    pub console: Vec<String>,

    /// Commands run once the dump is loaded
    #[serde(default = "default_after_load")]
    pub after_load: Vec<Vec<String>>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dump_dir: default_dump_dir(),
            reset: default_reset(),
            console: default_console(),
            after_load: default_after_load(),
        }
    }
}

fn default_dump_dir() -> PathBuf {
    PathBuf::from("db/dumps")
}

fn default_reset() -> Vec<Vec<String>> {
    vec![vec![
        "rake".to_string(),
        "db:drop".to_string(),
        "db:create".to_string(),
    ]]
}

fn default_console() -> Vec<String> {
    vec!["script/dbconsole".to_string()]
}

fn default_after_load() -> Vec<Vec<String>> {
    vec![vec!["rake".to_string(), "jobs:clear".to_string()]]
}

/// Complete `apps.yml` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Apps in file order
    #[serde(default)]
    pub apps: IndexMap<String, AppEntry>,

    #[serde(default)]
    pub hooks: HooksConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from a file, ignoring warnings.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load(path: &Path) -> FleetResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings.
    pub fn load_with_warnings(path: &Path) -> FleetResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
