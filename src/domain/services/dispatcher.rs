//! Batch Dispatcher
//!
//! Turns a selection into target records and applies one action to each,
//! in selection order, stopping at the first failure.

use crate::domain::entities::{Registry, Target};
use crate::domain::ports::{FleetEvent, FleetEventSink};
use crate::domain::value_objects::Selection;
use crate::error::{FleetError, FleetResult};

pub struct Dispatcher<'a> {
    registry: &'a Registry,
    events: &'a dyn FleetEventSink,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, events: &'a dyn FleetEventSink) -> Self {
        Self { registry, events }
    }

    /// Resolve the selection to target records without running anything.
    ///
    /// An empty selection falls back to the sole configured target, if there
    /// is exactly one. Otherwise it is `NoTargetsSelected`.
    pub fn resolve(&self, selection: Selection) -> FleetResult<Vec<&'a Target>> {
        if selection.is_empty() {
            if let Some(sole) = self.registry.sole() {
                self.events.on_event(FleetEvent::Defaulted {
                    name: sole.name().to_string(),
                });
                return Ok(vec![sole]);
            }
            return Err(FleetError::NoTargetsSelected);
        }

        selection
            .names()
            .iter()
            .map(|name| {
                self.registry
                    .get(name)
                    .ok_or_else(|| FleetError::UnknownTarget {
                        name: name.clone(),
                        known: self.registry.names().map(str::to_string).collect(),
                    })
            })
            .collect()
    }

    /// Run `action` once per selected target.
    pub fn for_each_selected<F>(&self, selection: Selection, action: F) -> FleetResult<()>
    where
        F: FnMut(&'a Target) -> FleetResult<()>,
    {
        let targets = self.resolve(selection)?;
        self.for_each_target(&targets, action)
    }

    /// Run `action` over already resolved targets.
    ///
    /// The first error is returned as-is; later targets are left untouched.
    pub fn for_each_target<F>(&self, targets: &[&'a Target], mut action: F) -> FleetResult<()>
    where
        F: FnMut(&'a Target) -> FleetResult<()>,
    {
        for target in targets {
            action(*target)?;
        }
        self.events.on_event(FleetEvent::BatchCompleted {
            count: targets.len(),
        });
        Ok(())
    }
}
