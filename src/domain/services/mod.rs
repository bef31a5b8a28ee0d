//! Domain Services
//!
//! - `Dispatcher` - applies one action to every selected target

mod dispatcher;

pub use dispatcher::Dispatcher;
