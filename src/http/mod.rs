/// HTTP transport adapter
///
/// Thin glue between axum and the dispatcher: translates inbound JSON
/// bodies into domain requests and outgoing responses into JSON bodies.
/// Request-shape validation lives here, not in the dispatcher.

pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::mcp::McpDispatcher;

/// Shared state handed to every route handler
#[derive(Clone)]
pub struct AppState {
    /// The single process-wide dispatcher
    pub dispatcher: Arc<McpDispatcher>,
    /// Startup configuration
    pub config: ServerConfig,
    /// Process start reference for the uptime report
    pub started_at: Instant,
}

impl AppState {
    /// Build the shared state around a dispatcher
    pub fn new(dispatcher: Arc<McpDispatcher>, config: ServerConfig) -> Self {
        Self {
            dispatcher,
            config,
            started_at: Instant::now(),
        }
    }
}

/// Build the application router with all routes and the CORS layer
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/mcp/health", get(routes::mcp_health))
        .route("/mcp/request", post(routes::mcp_request))
        .layer(middleware::from_fn_with_state(state.clone(), cors_headers))
        .with_state(state)
}

/// Attach the configured Access-Control-Allow-Origin header to every response
async fn cors_headers(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let origin = HeaderValue::from_str(&state.config.cors_origin)
        .unwrap_or_else(|_| HeaderValue::from_static("*"));

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    response
}
