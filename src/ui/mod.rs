//! Terminal presentation helpers: colors, capabilities, NDJSON and error rendering.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
