//! Vector search provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for nearest-neighbour retrieval of stored passages
///
/// Implementations:
/// - `WeaviateSearcher`: Weaviate GraphQL `Get` + `nearVector`
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Search for the passages most similar to the embedding.
    ///
    /// Passages come back in the order the service returned them
    /// (relevance descending, no re-ranking here). Zero results is a valid
    /// outcome, not an error: it means nothing sufficiently similar is
    /// indexed. Duplicates pass through unchanged.
    async fn search(&self, embedding: &[f64]) -> Result<Vec<String>>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
