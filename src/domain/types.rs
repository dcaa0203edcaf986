/// Method names and typed handler payloads
///
/// This module enumerates the MCP methods the dispatcher recognizes and
/// defines the serializable result shapes the handlers produce. All wire
/// keys are camelCase, matching the MCP JSON format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP protocol version we support
pub const MCP_VERSION: &str = "2024-11-05";

/// The fixed set of methods the dispatcher routes
///
/// Routing is an exact, case-sensitive string match; anything not listed
/// here yields a method-not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpMethod {
    Initialize,
    ToolsList,
    ToolsCall,
    ResourcesList,
    ResourcesRead,
}

impl McpMethod {
    /// Resolve a wire method name to a known method, if any
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(McpMethod::Initialize),
            "tools/list" => Some(McpMethod::ToolsList),
            "tools/call" => Some(McpMethod::ToolsCall),
            "resources/list" => Some(McpMethod::ResourcesList),
            "resources/read" => Some(McpMethod::ResourcesRead),
            _ => None,
        }
    }

    /// The wire name of this method
    pub fn name(self) -> &'static str {
        match self {
            McpMethod::Initialize => "initialize",
            McpMethod::ToolsList => "tools/list",
            McpMethod::ToolsCall => "tools/call",
            McpMethod::ResourcesList => "resources/list",
            McpMethod::ResourcesRead => "resources/read",
        }
    }
}

/// Result payload of the `initialize` method
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// MCP protocol version we support
    pub protocol_version: String,
    /// Our server capabilities
    pub capabilities: ServerCapabilities,
    /// Information about our server
    pub server_info: ServerInfo,
}

/// Capability declaration sent during initialization
///
/// Both capability objects are empty but present, which tells clients the
/// corresponding method families are available.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: Value,
    pub resources: Value,
}

/// Server identity advertised to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// A tool advertised via `tools/list`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Tool name (e.g., "echo")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

/// A resource advertised via `resources/list`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    /// URI the resource is addressed by
    pub uri: String,
    /// Human-readable name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}
