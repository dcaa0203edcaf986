/// The five fixed method handlers
///
/// All handlers are pure and deterministic: no I/O, no shared state. The
/// advertised tool and resource catalogs are static one-element lists, and
/// the resource content is a literal string.

use serde_json::{json, Value};

use crate::domain::{
    InitializeResult, McpErrorCode, McpRequest, McpResponse, ResourceDefinition,
    ServerCapabilities, ServerInfo, ToolDefinition, MCP_VERSION,
};
use crate::ServerError;

/// URI of the single static resource this server serves
const EXAMPLE_RESOURCE_URI: &str = "file://example.txt";

/// Content returned when reading the example resource
const EXAMPLE_RESOURCE_TEXT: &str =
    "Este é um arquivo de exemplo para demonstração do MCP Server.";

/// Handle `initialize`: protocol version, capabilities and server identity
///
/// Input parameters are ignored; every client gets the same answer.
pub fn handle_initialize(request: &McpRequest) -> Result<McpResponse, ServerError> {
    let result = InitializeResult {
        protocol_version: MCP_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: json!({}),
            resources: json!({}),
        },
        server_info: ServerInfo {
            name: "mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    Ok(McpResponse::success(
        request.id.clone(),
        serde_json::to_value(result)?,
    ))
}

/// Handle `tools/list`: the static one-tool catalog
pub fn handle_tools_list(request: &McpRequest) -> Result<McpResponse, ServerError> {
    let tools = vec![ToolDefinition {
        name: "echo".to_string(),
        description: "Echo back the input".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Message to echo back",
                },
            },
            "required": ["message"],
        }),
    }];

    Ok(McpResponse::success(
        request.id.clone(),
        json!({ "tools": tools }),
    ))
}

/// Handle `tools/call`: invoke a tool by name
///
/// Only `echo` exists. Its reply substitutes "No message provided" when
/// `arguments.message` is absent or an empty string.
pub fn handle_tools_call(request: &McpRequest) -> Result<McpResponse, ServerError> {
    let name = param(request, "name");
    let name = name.as_ref().and_then(Value::as_str).unwrap_or("");

    if name == "echo" {
        let arguments = param(request, "arguments");
        let message = arguments
            .as_ref()
            .and_then(|args| args.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("No message provided");

        return Ok(McpResponse::success(
            request.id.clone(),
            json!({
                "content": [
                    {
                        "type": "text",
                        "text": format!("Echo: {}", message),
                    },
                ],
            }),
        ));
    }

    Ok(McpResponse::error(
        request.id.clone(),
        McpErrorCode::MethodNotFound,
        format!("Tool '{}' não encontrado", name),
    ))
}

/// Handle `resources/list`: the static one-resource catalog
pub fn handle_resources_list(request: &McpRequest) -> Result<McpResponse, ServerError> {
    let resources = vec![ResourceDefinition {
        uri: EXAMPLE_RESOURCE_URI.to_string(),
        name: "Example File".to_string(),
        description: Some("An example text file".to_string()),
        mime_type: Some("text/plain".to_string()),
    }];

    Ok(McpResponse::success(
        request.id.clone(),
        json!({ "resources": resources }),
    ))
}

/// Handle `resources/read`: fetch a resource by URI
///
/// No real fetching happens; the only known URI maps to a literal string.
pub fn handle_resources_read(request: &McpRequest) -> Result<McpResponse, ServerError> {
    let uri = param(request, "uri");
    let uri = uri.as_ref().and_then(Value::as_str).unwrap_or("");

    if uri == EXAMPLE_RESOURCE_URI {
        return Ok(McpResponse::success(
            request.id.clone(),
            json!({
                "contents": [
                    {
                        "uri": uri,
                        "mimeType": "text/plain",
                        "text": EXAMPLE_RESOURCE_TEXT,
                    },
                ],
            }),
        ));
    }

    Ok(McpResponse::error(
        request.id.clone(),
        McpErrorCode::MethodNotFound,
        format!("Resource '{}' não encontrado", uri),
    ))
}

/// Extract one named parameter from the request's parameter map
fn param(request: &McpRequest, key: &str) -> Option<Value> {
    request
        .params
        .as_ref()
        .and_then(|params| params.get(key))
        .cloned()
}
