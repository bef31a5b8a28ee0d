//! Invocation grammar
//!
//! `appfleet <app> [<app> ...] <command>`: the last token is the command,
//! everything before it selects apps (`all` selects every app).

use crate::commands::FleetCommand;
use crate::domain::entities::Registry;
use crate::domain::value_objects::Selection;
use crate::error::{FleetError, FleetResult};

/// Keyword that selects every configured app
pub const ALL_SELECTOR: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub selectors: Vec<String>,
    pub command: FleetCommand,
}

impl Invocation {
    pub fn parse(tokens: &[String]) -> FleetResult<Self> {
        let (command, selectors) = tokens
            .split_last()
            .ok_or_else(|| FleetError::UnknownCommand {
                token: String::new(),
            })?;

        Ok(Self {
            selectors: selectors.to_vec(),
            command: FleetCommand::parse(command)?,
        })
    }

    /// Build the selection, failing on the first unknown app name.
    pub fn selection(&self, registry: &Registry) -> FleetResult<Selection> {
        let mut selection = Selection::new();
        for selector in &self.selectors {
            if selector == ALL_SELECTOR {
                selection.select_all(registry);
            } else {
                selection.select(registry, selector)?;
            }
        }
        Ok(selection)
    }
}
