/// Domain module containing the core MCP value types
///
/// This module defines the request/response entities exchanged with MCP
/// clients, the fixed error-code enumeration, and the typed payloads the
/// method handlers return.

pub mod request;
pub mod response;
pub mod types;

// Re-export public types for easy access
pub use request::*;
pub use response::*;
pub use types::*;
