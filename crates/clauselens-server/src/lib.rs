//! ClauseLens Server
//!
//! The HTTP surface over the analysis engine: one POST endpoint wrapping
//! `analyze` + `calculate_risk_metrics`, plus a health check. File upload,
//! export formats, and presentation stay with the callers — this service
//! accepts fully-materialized contract text and returns the structured
//! result.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::create_router;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the analysis HTTP server
///
/// Initializes tracing, builds the router, and serves until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    info!("Starting ClauseLens server");
    info!("Bind address: {}", config.bind_addr());
    info!("Request body limit: {} bytes", config.max_body_bytes);

    let app = create_router(&config);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_port, 8080);
        assert!(config.max_body_bytes > 0);
    }
}
