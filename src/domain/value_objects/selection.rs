//! Selection value object
//!
//! Ordered set of target names chosen on the command line. Lives for one
//! invocation and is consumed by the dispatcher.

use crate::domain::entities::Registry;
use crate::error::{FleetError, FleetResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name`, ignoring repeats.
    ///
    /// Names missing from the registry are rejected here, so nothing
    /// unknown ever reaches dispatch.
    pub fn select(&mut self, registry: &Registry, name: &str) -> FleetResult<()> {
        if !registry.contains(name) {
            return Err(FleetError::UnknownTarget {
                name: name.to_string(),
                known: registry.names().map(str::to_string).collect(),
            });
        }
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        Ok(())
    }

    /// Replace the selection with every registry target, in registry order.
    pub fn select_all(&mut self, registry: &Registry) {
        self.names = registry.names().map(str::to_string).collect();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
