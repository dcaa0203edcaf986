/// Public library interface for the MCP server
///
/// This module wires the in-memory store, the dispatcher and the HTTP
/// transport together and exports the types tests and embedders need.

use std::sync::Arc;

use thiserror::Error;

// Internal modules
pub mod config;
pub mod domain;
pub mod http;
pub mod mcp;
pub mod store;

// Re-export public types for easy access
pub use config::ServerConfig;
pub use domain::*;
pub use mcp::McpDispatcher;
pub use store::{InMemoryStore, McpStore};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The assembled MCP server
///
/// Owns the single shared store instance and the dispatcher built around
/// it. `run` binds the configured port and serves HTTP until the process
/// exits.
pub struct McpServer {
    store: Arc<InMemoryStore>,
    dispatcher: Arc<McpDispatcher>,
    config: ServerConfig,
}

impl McpServer {
    /// Assemble a server from its configuration
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let dispatcher = Arc::new(McpDispatcher::new(store.clone() as Arc<dyn McpStore>));

        Self {
            store,
            dispatcher,
            config,
        }
    }

    /// Build the axum router for this server
    ///
    /// Exposed separately so tests can serve it on an ephemeral port.
    pub fn router(&self) -> axum::Router {
        let state = http::AppState::new(self.dispatcher.clone(), self.config.clone());
        http::build_router(state)
    }

    /// Bind the configured port and serve HTTP
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = format!("0.0.0.0:{}", self.config.port);
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("MCP server listening on http://{}", addr);

        axum::serve(listener, router).await?;
        Ok(())
    }

    /// The shared store (useful for testing and diagnostics)
    pub fn store(&self) -> &Arc<InMemoryStore> {
        &self.store
    }

    /// The dispatcher (useful for testing)
    pub fn dispatcher(&self) -> &Arc<McpDispatcher> {
        &self.dispatcher
    }
}
