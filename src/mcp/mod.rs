/// MCP method dispatch
///
/// This module routes incoming requests to their method handlers and
/// records both sides of every exchange in the store.

pub mod dispatcher;
pub mod methods;

pub use dispatcher::*;
