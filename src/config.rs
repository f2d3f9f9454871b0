//! Configuration for the gateway
//!
//! One section per collaborator, with defaults matching a local
//! deployment. `GatewayConfig::from_env` overrides the string fields from
//! environment variables so the service can be pointed at real endpoints
//! without a config file.

use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Embedding service (TEI) configuration
    pub embedding: EmbeddingConfig,
    /// Vector search service (Weaviate) configuration
    pub search: SearchConfig,
    /// Generation service (vLLM) configuration
    pub generation: GenerationConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, host:port
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8081".to_string(),
        }
    }
}

/// Embedding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// TEI base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Vector search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weaviate base URL
    pub base_url: String,
    /// Collection (class) to search
    pub collection: String,
    /// Maximum number of passages to retrieve
    pub limit: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            collection: "LlamaIndex".to_string(),
            limit: 3,
            timeout_secs: 30,
        }
    }
}

/// Generation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// OpenAI-compatible base URL (including the /v1 prefix)
    pub base_url: String,
    /// Model name passed through to the service
    pub model: String,
    /// Maximum number of tokens to generate per answer
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/v1".to_string(),
            model: "microsoft/Phi-3-mini-128k-instruct".to_string(),
            max_tokens: 4096,
            timeout_secs: 30,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                addr: env_or("SERVER_ADDR", &defaults.server.addr),
            },
            embedding: EmbeddingConfig {
                base_url: env_or("TEI_BASE_URL", &defaults.embedding.base_url),
                ..defaults.embedding
            },
            search: SearchConfig {
                base_url: env_or("WEAVIATE_BASE_URL", &defaults.search.base_url),
                collection: env_or("COLLECTION_NAME", &defaults.search.collection),
                ..defaults.search
            },
            generation: GenerationConfig {
                base_url: env_or("VLLM_BASE_URL", &defaults.generation.base_url),
                model: env_or("VLLM_MODEL_NAME", &defaults.generation.model),
                ..defaults.generation
            },
        }
    }
}

/// Read an environment variable, treating unset and empty the same way.
fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
