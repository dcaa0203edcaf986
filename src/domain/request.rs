/// The MCP request entity
///
/// An incoming call as seen by the dispatcher: an identifier chosen by the
/// client, the method name to route on, and an optional parameter map.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable MCP request value
///
/// Construction never fails: absent fields default to empty strings and
/// the timestamp defaults to the current time. Use [`McpRequest::validate`]
/// to check whether the identifier and method are actually populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpRequest {
    /// Client-chosen identifier, echoed back in the response
    pub id: String,
    /// Method name to dispatch on (e.g., "tools/call")
    pub method: String,
    /// Optional string-keyed parameter map
    pub params: Option<HashMap<String, Value>>,
    /// When this request value was created
    pub timestamp: DateTime<Utc>,
}

impl McpRequest {
    /// Create a new request with the current time as its timestamp
    pub fn new(
        id: impl Into<String>,
        method: impl Into<String>,
        params: Option<HashMap<String, Value>>,
    ) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            params,
            timestamp: Utc::now(),
        }
    }

    /// Check that both the identifier and the method name are non-empty
    ///
    /// The dispatcher does not call this: a request with empty fields still
    /// dispatches (and lands on the method-not-found path). Callers that
    /// want to reject such requests up front can use this predicate.
    pub fn validate(&self) -> bool {
        !self.id.is_empty() && !self.method.is_empty()
    }
}

impl Default for McpRequest {
    fn default() -> Self {
        Self {
            id: String::new(),
            method: String::new(),
            params: None,
            timestamp: Utc::now(),
        }
    }
}
