/// Main entry point for the MCP server
///
/// Sets up logging, reads configuration from the environment and starts
/// the HTTP server.

use clap::Parser;
use tracing::info;

use mcp_server::{McpServer, ServerConfig};

/// Command line arguments for the MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TCP port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("mcp_server={}", log_level))
        .init();

    info!("Starting MCP server");

    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("Environment: {} | port: {}", config.environment, config.port);

    let server = McpServer::new(config);
    server.run().await?;

    info!("MCP server shutdown complete");
    Ok(())
}
