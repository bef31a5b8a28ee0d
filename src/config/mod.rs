//! Configuration module for appfleet
//!
//! Resolution order for the apps file:
//! 1. `--config` flag (highest priority)
//! 2. `APPFLEET_CONFIG` environment variable
//! 3. `config/apps.yml` relative to the working directory
//!
//! `APPFLEET_PLATFORM_CLI` overrides `platform.cli` after loading.

mod loader;
mod types;
mod vars;

pub use loader::{
    closest_match, resolve_config_path, resolve_vars_path, with_env_overrides, ConfigWarning,
    DEFAULT_CONFIG_PATH, DEFAULT_VARS_PATH,
};
pub use types::{AppEntry, Config, DatabaseConfig, HooksConfig, PlatformConfig};
pub use vars::VarsFile;

/// Parse an apps file from a string, panicking on invalid input.
#[cfg(test)]
pub(crate) fn parse_for_tests(yaml: &str) -> Config {
    loader::parse_with_warnings(yaml, std::path::Path::new("config/apps.yml"))
        .expect("valid test config")
        .0
}
