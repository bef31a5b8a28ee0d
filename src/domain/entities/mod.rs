//! Domain Entities
//!
//! - `Target` - One configured deployment target
//! - `Registry` - All targets known to an invocation, in config order

mod registry;
mod target;

pub use registry::Registry;
pub use target::{repo_url, Target};
