/// Dispatcher driving the request/response lifecycle
///
/// `execute` is the single entry point: it persists the request, routes it
/// to one of the fixed method handlers, persists the resulting response
/// and returns it. Nothing escapes uncaught — any handler failure is
/// recovered into an INTERNAL_ERROR response which is persisted like any
/// success.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{McpErrorCode, McpMethod, McpRequest, McpResponse};
use crate::mcp::methods;
use crate::store::McpStore;
use crate::ServerError;

/// Fallback message when a recovered error has nothing to say
const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Routes requests to method handlers and records both sides
///
/// Holds a reference to the single shared store instance, received at
/// construction.
pub struct McpDispatcher {
    store: Arc<dyn McpStore>,
}

impl McpDispatcher {
    /// Create a dispatcher backed by the given store
    pub fn new(store: Arc<dyn McpStore>) -> Self {
        Self { store }
    }

    /// Process one request end to end
    ///
    /// Sequencing guarantee: the request is saved before any handler runs,
    /// and exactly one response is saved after, even when handling fails.
    pub fn execute(&self, request: McpRequest) -> McpResponse {
        debug!(id = %request.id, method = %request.method, "dispatching MCP request");

        self.store.save_request(request.clone());

        let response = match self.process_method(&request) {
            Ok(response) => response,
            Err(e) => {
                error!(id = %request.id, "handler failed: {}", e);
                let mut message = e.to_string();
                if message.is_empty() {
                    message = INTERNAL_ERROR_MESSAGE.to_string();
                }
                McpResponse::error(request.id.clone(), McpErrorCode::InternalError, message)
            }
        };

        self.store.save_response(response.clone());
        response
    }

    /// Route by exact method name to one of the five handlers
    fn process_method(&self, request: &McpRequest) -> Result<McpResponse, ServerError> {
        match McpMethod::from_name(&request.method) {
            Some(McpMethod::Initialize) => methods::handle_initialize(request),
            Some(McpMethod::ToolsList) => methods::handle_tools_list(request),
            Some(McpMethod::ToolsCall) => methods::handle_tools_call(request),
            Some(McpMethod::ResourcesList) => methods::handle_resources_list(request),
            Some(McpMethod::ResourcesRead) => methods::handle_resources_read(request),
            None => Ok(McpResponse::error(
                request.id.clone(),
                McpErrorCode::MethodNotFound,
                format!("Método '{}' não encontrado", request.method),
            )),
        }
    }
}
