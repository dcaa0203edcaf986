/// Route handlers and wire DTOs
///
/// `POST /mcp/request` is the only route that reaches the dispatcher; the
/// rest are health probes. Malformed bodies are rejected here with 400
/// before any dispatch happens, while every body that parses comes back
/// as 201 whether the outcome is a result or a protocol-level error.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::domain::{McpError, McpRequest, McpResponse};
use crate::http::AppState;

/// Inbound body of `POST /mcp/request`
///
/// Unknown top-level fields are rejected, matching the original's
/// whitelist validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct McpRequestDto {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<HashMap<String, Value>>,
}

/// Outbound body of `POST /mcp/request`
///
/// The domain response's timestamp stays internal; only the id and the
/// outcome travel over the wire.
#[derive(Debug, Serialize)]
pub struct McpResponseDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl From<McpResponse> for McpResponseDto {
    fn from(response: McpResponse) -> Self {
        Self {
            id: response.id,
            result: response.result,
            error: response.error,
        }
    }
}

/// `GET /` — liveness banner
pub async fn root() -> &'static str {
    "MCP Server está funcionando! 🚀"
}

/// `GET /health` — application health report
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /mcp/health` — MCP service health
pub async fn mcp_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mcp",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// `POST /mcp/request` — process one MCP request
///
/// Bodies that fail shape validation never reach the dispatcher.
pub async fn mcp_request(
    State(state): State<AppState>,
    payload: Result<Json<McpRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<McpResponseDto>), (StatusCode, Json<Value>)> {
    let Json(dto) = payload.map_err(|rejection| {
        warn!("rejected malformed MCP request body: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "statusCode": 400,
                "message": rejection.body_text(),
            })),
        )
    })?;

    info!(id = %dto.id, method = %dto.method, "received MCP request");

    let request = McpRequest::new(dto.id, dto.method, dto.params);
    let response = state.dispatcher.execute(request);

    Ok((StatusCode::CREATED, Json(response.into())))
}
