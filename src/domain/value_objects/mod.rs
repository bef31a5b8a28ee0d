//! Domain Value Objects
//!
//! Small values threaded through a single invocation.

mod selection;

pub use selection::Selection;
