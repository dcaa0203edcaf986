/// Unit tests for the request/response model
use mcp_server::*;

use serde_json::json;

#[test]
fn request_defaults_to_empty_fields() {
    let request = McpRequest::default();

    assert_eq!(request.id, "");
    assert_eq!(request.method, "");
    assert!(request.params.is_none());
}

#[test]
fn request_construction_never_fails_on_empty_input() {
    // Empty strings are accepted at construction; only validate() flags them.
    let request = McpRequest::new("", "", None);

    assert!(!request.validate());
}

#[test]
fn request_validate_requires_id_and_method() {
    assert!(McpRequest::new("1", "initialize", None).validate());
    assert!(!McpRequest::new("", "initialize", None).validate());
    assert!(!McpRequest::new("1", "", None).validate());
}

#[test]
fn partial_request_fills_defaults() {
    let request = McpRequest {
        method: "tools/list".to_string(),
        ..Default::default()
    };

    assert_eq!(request.id, "");
    assert_eq!(request.method, "tools/list");
    assert!(!request.validate());
}

#[test]
fn success_response_has_result_and_no_error() {
    let response = McpResponse::success("1", json!({"ok": true}));

    assert_eq!(response.id, "1");
    assert!(response.result.is_some());
    assert!(response.error.is_none());
    assert!(!response.is_error());
}

#[test]
fn error_response_has_error_and_no_result() {
    let response = McpResponse::error("2", McpErrorCode::MethodNotFound, "nope");

    assert_eq!(response.id, "2");
    assert!(response.result.is_none());
    assert!(response.is_error());

    let error = response.error.expect("error should be set");
    assert_eq!(error.code, McpErrorCode::MethodNotFound);
    assert_eq!(error.message, "nope");
}

#[test]
fn error_codes_match_jsonrpc_reserved_values() {
    assert_eq!(McpErrorCode::ParseError.code(), -32700);
    assert_eq!(McpErrorCode::InvalidRequest.code(), -32600);
    assert_eq!(McpErrorCode::MethodNotFound.code(), -32601);
    assert_eq!(McpErrorCode::InvalidParams.code(), -32602);
    assert_eq!(McpErrorCode::InternalError.code(), -32603);
}

#[test]
fn error_code_serializes_as_plain_integer() {
    let response = McpResponse::error("3", McpErrorCode::InternalError, "boom");
    let value = serde_json::to_value(&response).expect("response should serialize");

    assert_eq!(value["error"]["code"], json!(-32603));
    assert_eq!(value["error"]["message"], json!("boom"));
    // The result key is skipped entirely when unset.
    assert!(value.get("result").is_none());
}

#[test]
fn method_names_round_trip() {
    for method in [
        McpMethod::Initialize,
        McpMethod::ToolsList,
        McpMethod::ToolsCall,
        McpMethod::ResourcesList,
        McpMethod::ResourcesRead,
    ] {
        assert_eq!(McpMethod::from_name(method.name()), Some(method));
    }
}

#[test]
fn method_matching_is_case_sensitive() {
    assert!(McpMethod::from_name("Initialize").is_none());
    assert!(McpMethod::from_name("TOOLS/LIST").is_none());
    assert!(McpMethod::from_name("notifications/initialized").is_none());
}
