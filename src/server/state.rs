//! Application state for the gateway server

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::pipeline::RagPipeline;
use crate::providers::{
    tei::TeiEmbedder, vllm::VllmGenerator, weaviate::WeaviateSearcher, EmbeddingProvider,
    LlmProvider, VectorSearchProvider,
};

/// Shared application state
///
/// Cheap to clone; the pipeline and its HTTP clients live behind an `Arc`
/// and are safe for concurrent use across requests.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<RagPipeline>,
}

impl AppState {
    /// Build the concrete downstream clients from configuration.
    ///
    /// Each client is constructed once here and reused for the process
    /// lifetime; nothing downstream-facing is created per request.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let embedder = Arc::new(TeiEmbedder::new(&config.embedding)?);
        let searcher = Arc::new(WeaviateSearcher::new(&config.search)?);
        let llm = Arc::new(VllmGenerator::new(&config.generation)?);

        tracing::info!(
            tei = %config.embedding.base_url,
            weaviate = %config.search.base_url,
            vllm = %config.generation.base_url,
            model = %config.generation.model,
            "downstream clients initialized"
        );

        Ok(Self::from_providers(embedder, searcher, llm))
    }

    /// Assemble state from already-built providers
    pub fn from_providers(
        embedder: Arc<dyn EmbeddingProvider>,
        searcher: Arc<dyn VectorSearchProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            pipeline: Arc::new(RagPipeline::new(embedder, searcher, llm)),
        }
    }

    /// Get the query pipeline
    pub fn pipeline(&self) -> &RagPipeline {
        &self.pipeline
    }
}
