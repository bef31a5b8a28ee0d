//! Per-app environment variables for `config:upsert`

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_yaml_ng::Value;

use crate::error::{FleetError, FleetResult};

/// Contents of `vars.yml`: app name → variable name → value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarsFile {
    apps: IndexMap<String, IndexMap<String, Value>>,
}

impl VarsFile {
    /// Load the vars file. Returns `None` when the file does not exist.
    pub fn load(path: &Path) -> FleetResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path).map(Some)
    }

    pub(crate) fn parse(content: &str, path: &Path) -> FleetResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let apps: Option<IndexMap<String, Option<IndexMap<String, Value>>>> =
            serde_yaml_ng::from_str(content).map_err(|e| FleetError::ConfigParse {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let apps = apps
            .unwrap_or_default()
            .into_iter()
            .map(|(name, vars)| (name, vars.unwrap_or_default()))
            .collect();

        Ok(Self { apps })
    }

    /// `KEY=value` pairs for an app, skipping null and empty values.
    ///
    /// Returns `None` when the app has no entry at all.
    pub fn pairs_for(&self, app: &str) -> Option<Vec<(String, String)>> {
        let vars = self.apps.get(app)?;
        Some(
            vars.iter()
                .filter_map(|(key, value)| {
                    render_scalar(value)
                        .filter(|v| !v.is_empty())
                        .map(|v| (key.clone(), v))
                })
                .collect(),
        )
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => render_scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
