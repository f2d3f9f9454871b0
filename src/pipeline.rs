//! Query orchestration: embed, search, assemble, generate
//!
//! The four stages run strictly in order; each stage's output is the next
//! stage's sole input and the first failure aborts the invocation. No state
//! survives a query, so concurrent invocations are fully independent.

use std::sync::Arc;

use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::providers::{EmbeddingProvider, LlmProvider, VectorSearchProvider};

/// The core RAG pipeline, holding one long-lived client per backing service
pub struct RagPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    searcher: Arc<dyn VectorSearchProvider>,
    llm: Arc<dyn LlmProvider>,
}

impl RagPipeline {
    /// Assemble a pipeline from injected providers
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        searcher: Arc<dyn VectorSearchProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            embedder,
            searcher,
            llm,
        }
    }

    /// Answer a query with retrieval-augmented generation.
    ///
    /// The caller is expected to have validated the query as non-empty.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let embedding = self.embedder.embed(query).await?;
        tracing::debug!(dimensions = embedding.len(), "query embedded");

        let passages = self.searcher.search(&embedding).await?;
        tracing::debug!(passages = passages.len(), "context retrieved");

        let prompt = PromptBuilder::build_prompt(query, &passages);

        self.llm.generate(&prompt).await
    }

    /// Health of each downstream dependency, for readiness reporting.
    pub async fn health_report(&self) -> Vec<(&str, bool)> {
        let mut report = Vec::with_capacity(3);
        report.push((
            self.embedder.name(),
            self.embedder.health_check().await.unwrap_or(false),
        ));
        report.push((
            self.searcher.name(),
            self.searcher.health_check().await.unwrap_or(false),
        ));
        report.push((
            self.llm.name(),
            self.llm.health_check().await.unwrap_or(false),
        ));
        report
    }

    /// True when every downstream dependency is reachable
    pub async fn is_ready(&self) -> bool {
        self.health_report().await.iter().all(|(_, healthy)| *healthy)
    }
}
