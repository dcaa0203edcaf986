/// In-memory implementation of the MCP store
///
/// This is the concrete store used by the server: two process-lifetime
/// `HashMap`s, no eviction, no TTL, no durability. State lives exactly as
/// long as the process does.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{McpRequest, McpResponse};
use crate::store::McpStore;

/// In-memory store backed by two id-keyed maps
///
/// The maps sit behind a single mutex so that concurrent axum workers
/// sharing one instance cannot lose updates. Each store call locks once,
/// so calls are atomic relative to each other.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreMaps>,
}

#[derive(Debug, Default)]
struct StoreMaps {
    requests: HashMap<String, McpRequest>,
    responses: HashMap<String, McpResponse>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreMaps> {
        // A poisoned lock means a panic while holding the guard; the maps
        // themselves are still structurally sound, so keep serving.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl McpStore for InMemoryStore {
    fn save_request(&self, request: McpRequest) {
        self.lock().requests.insert(request.id.clone(), request);
    }

    fn save_response(&self, response: McpResponse) {
        self.lock().responses.insert(response.id.clone(), response);
    }

    fn find_request_by_id(&self, id: &str) -> Option<McpRequest> {
        self.lock().requests.get(id).cloned()
    }

    fn find_response_by_id(&self, id: &str) -> Option<McpResponse> {
        self.lock().responses.get(id).cloned()
    }

    fn list_requests(&self) -> Vec<McpRequest> {
        self.lock().requests.values().cloned().collect()
    }

    fn list_responses(&self) -> Vec<McpResponse> {
        self.lock().responses.values().cloned().collect()
    }

    fn clear(&self) {
        let mut maps = self.lock();
        maps.requests.clear();
        maps.responses.clear();
    }
}
