/// Storage layer for recorded request/response pairs
///
/// This module defines the capability trait the dispatcher talks to and
/// re-exports the in-memory implementation. Keeping the trait small means
/// a durable implementation can be swapped in later without touching the
/// dispatcher.

pub mod memory;

// Re-export the main storage types
pub use memory::*;

use crate::domain::{McpRequest, McpResponse};

/// Trait defining the storage interface for MCP exchanges
///
/// Saves are keyed by the value's identifier with last-write-wins
/// semantics; there is no duplicate-id conflict detection. Lookups return
/// `None` rather than failing when nothing is stored under an id.
pub trait McpStore: Send + Sync {
    /// Insert or overwrite the request keyed by its id
    fn save_request(&self, request: McpRequest);

    /// Insert or overwrite the response keyed by its id
    fn save_response(&self, response: McpResponse);

    /// Look up a stored request by id
    fn find_request_by_id(&self, id: &str) -> Option<McpRequest>;

    /// Look up a stored response by id
    fn find_response_by_id(&self, id: &str) -> Option<McpResponse>;

    /// All stored requests, in no guaranteed order
    fn list_requests(&self) -> Vec<McpRequest>;

    /// All stored responses, in no guaranteed order
    fn list_responses(&self) -> Vec<McpResponse>;

    /// Empty both mappings; idempotent
    fn clear(&self);
}
