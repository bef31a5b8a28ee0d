//! Registry entity
//!
//! The fixed set of targets known to this invocation, in configuration order.
//! Built once at startup and never mutated afterwards.

use indexmap::IndexMap;

use crate::config::Config;

use super::target::Target;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    targets: IndexMap<String, Target>,
}

impl Registry {
    /// Build a registry from targets. Later duplicates of a name are ignored.
    pub fn new(targets: impl IntoIterator<Item = Target>) -> Self {
        let mut map = IndexMap::new();
        for target in targets {
            map.entry(target.name().to_string()).or_insert(target);
        }
        Self { targets: map }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .apps
                .iter()
                .map(|(name, entry)| Target::from_entry(name, entry, &config.platform.host)),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target names in registry order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// The only target, when exactly one is configured
    pub fn sole(&self) -> Option<&Target> {
        if self.targets.len() == 1 {
            self.targets.values().next()
        } else {
            None
        }
    }
}
