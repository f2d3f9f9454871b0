//! rag-gateway: retrieval-augmented answers over HTTP
//!
//! The gateway turns a question into an answer in four stages: embed the
//! query text (TEI), retrieve the most similar stored passages (Weaviate),
//! assemble a grounded prompt, and generate the answer with an
//! OpenAI-compatible LLM server (vLLM). Each backing service sits behind a
//! provider trait so the pipeline can be exercised without the network.

pub mod config;
pub mod error;
pub mod generation;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod types;

pub use config::GatewayConfig;
pub use error::{Error, Result};
pub use pipeline::RagPipeline;
pub use types::{QueryRequest, QueryResponse};
