/// Server configuration read from the environment
///
/// All settings have defaults, so the server starts with no environment at
/// all. Configuration is read once at startup and never reloaded.

use std::env;

/// Default TCP port when `PORT` is unset or unparseable
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind (`PORT`, default 3000)
    pub port: u16,
    /// Deployment environment name (`APP_ENV`, default "development")
    pub environment: String,
    /// Value for the Access-Control-Allow-Origin header (`CORS_ORIGIN`, default "*")
    pub cors_origin: String,
}

impl ServerConfig {
    /// Build a configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let environment =
            env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Self {
            port,
            environment,
            cors_origin,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origin: "*".to_string(),
        }
    }
}
