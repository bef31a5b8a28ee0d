//! Common test utilities for appfleet CLI scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory with fake `heroku` and `git`
//! - Fixtures: reusable config content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
