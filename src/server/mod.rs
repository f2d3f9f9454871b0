//! HTTP server for the gateway

pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Gateway HTTP server
pub struct RagServer {
    config: GatewayConfig,
    state: AppState,
}

impl RagServer {
    /// Create a new server, building the downstream clients
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let state = AppState::new(&config)?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes
    fn build_router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/query", post(routes::answer_query))
            .route("/health", get(routes::health))
            .route("/ready", get(routes::readiness))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server
            .addr
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address: {}", e)))?;

        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("failed to bind {}: {}", addr, e)))?;

        tracing::info!("gateway listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::Internal(format!("server error: {}", e)))?;

        tracing::info!("server exited gracefully");
        Ok(())
    }

    /// Get the shared application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the configured bind address
    pub fn address(&self) -> &str {
        &self.config.server.addr
    }
}

/// Resolve when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
