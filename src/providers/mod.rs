//! Provider abstractions for the three backing services
//!
//! Each downstream dependency sits behind a trait so the pipeline can be
//! driven by stubs in tests and the concrete clients stay swappable.

pub mod embedding;
pub mod llm;
pub mod tei;
pub mod vector_search;
pub mod vllm;
pub mod weaviate;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use vector_search::VectorSearchProvider;

#[cfg(test)]
pub(crate) mod testing;
