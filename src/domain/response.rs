/// The MCP response entity and error-code enumeration
///
/// A response carries either a result payload or an error, never both and
/// never neither. The two factory methods are the only way to build one,
/// so the invariant holds by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// JSON-RPC 2.0 reserved error codes used by the MCP dispatch
///
/// INVALID_REQUEST, INVALID_PARAMS and PARSE_ERROR are part of the fixed
/// enumeration but no current handler produces them; they are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpErrorCode {
    /// Invalid JSON was received by the server
    ParseError = -32700,
    /// The payload is not a valid request object
    InvalidRequest = -32600,
    /// The requested method doesn't exist
    MethodNotFound = -32601,
    /// Method exists but parameters are wrong
    InvalidParams = -32602,
    /// Internal server error
    InternalError = -32603,
}

impl McpErrorCode {
    /// The numeric wire value of this code
    pub fn code(self) -> i32 {
        self as i32
    }
}

// Error codes travel as plain JSON-RPC integers.
impl Serialize for McpErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for McpErrorCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        match code {
            -32700 => Ok(McpErrorCode::ParseError),
            -32600 => Ok(McpErrorCode::InvalidRequest),
            -32601 => Ok(McpErrorCode::MethodNotFound),
            -32602 => Ok(McpErrorCode::InvalidParams),
            -32603 => Ok(McpErrorCode::InternalError),
            other => Err(serde::de::Error::custom(format!(
                "unknown MCP error code: {}",
                other
            ))),
        }
    }
}

/// Error information attached to a failed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpError {
    /// Numeric code from the fixed enumeration
    pub code: McpErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// An immutable MCP response value
///
/// Exactly one of `result` / `error` is populated, enforced by the
/// [`McpResponse::success`] and [`McpResponse::error`] factories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    /// Identifier of the originating request
    pub id: String,
    /// Successful result payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// When this response value was created
    pub timestamp: DateTime<Utc>,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(id: impl Into<String>, result: Value) -> Self {
        Self {
            id: id.into(),
            result: Some(result),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(id: impl Into<String>, code: McpErrorCode, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            result: None,
            error: Some(McpError {
                code,
                message: message.into(),
            }),
            timestamp: Utc::now(),
        }
    }

    /// True iff this response carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
