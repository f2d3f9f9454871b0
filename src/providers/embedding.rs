//! Embedding provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for converting query text into a dense embedding vector
///
/// Implementations:
/// - `TeiEmbedder`: Text Embeddings Inference server
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    ///
    /// A successful result is never empty; an unusable service response is
    /// an error, not a zero-length vector.
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
