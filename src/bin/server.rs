//! Gateway server binary
//!
//! Run with: cargo run --bin rag-gateway-server

use rag_gateway::{config::GatewayConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rag_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env();

    tracing::info!("configuration loaded");
    tracing::info!("  - TEI: {}", config.embedding.base_url);
    tracing::info!(
        "  - Weaviate: {} (collection {}, limit {})",
        config.search.base_url,
        config.search.collection,
        config.search.limit
    );
    tracing::info!(
        "  - vLLM: {} (model {})",
        config.generation.base_url,
        config.generation.model
    );

    let server = RagServer::new(config)?;

    // Startup probe: the server comes up regardless, but missing
    // dependencies are worth a warning before the first query fails.
    for (name, healthy) in server.state().pipeline().health_report().await {
        if healthy {
            tracing::info!("{} is reachable", name);
        } else {
            tracing::warn!("{} is not reachable; queries will fail until it is up", name);
        }
    }

    server.start().await?;

    Ok(())
}
