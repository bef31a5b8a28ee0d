//! Domain Layer
//!
//! Target selection and batch dispatch, free of process and terminal I/O.
//!
//! ## Structure
//!
//! - `entities/` - Targets and the registry that holds them
//! - `value_objects/` - The per-invocation selection
//! - `services/` - The batch dispatcher
//! - `ports/` - Interfaces for running commands, prompting, hooks and events
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Commands, prompts and output all go through ports
//! 2. **Explicit state** - The selection is a value moved into the dispatcher
//! 3. **Ports & Adapters** - `infrastructure` provides the implementations

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
