//! Text Embeddings Inference (TEI) client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::EmbeddingConfig;
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;

/// Embedding provider backed by a TEI server
pub struct TeiEmbedder {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: Vec<&'a str>,
    truncate: bool,
    normalize: bool,
}

/// TEI returns one vector per input text, in input order.
type EmbedResponse = Vec<Vec<f64>>;

impl TeiEmbedder {
    /// Create a new TEI embedder with its own pooled HTTP client
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build TEI HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Pull the query's vector out of the response batch.
///
/// An empty batch or an empty first vector means the service did not embed
/// anything usable; neither may surface as a zero-length embedding.
fn first_embedding(mut batch: EmbedResponse) -> Result<Vec<f64>> {
    if batch.is_empty() || batch[0].is_empty() {
        return Err(Error::EmbeddingUnavailable(
            "empty embedding in response".to_string(),
        ));
    }
    Ok(batch.swap_remove(0))
}

#[async_trait]
impl EmbeddingProvider for TeiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let url = format!("{}/embed", self.base_url);
        // Single-element batch; truncation and normalization are requested
        // so the vector is unit-normalized and safe for fixed-length models.
        let request = EmbedRequest {
            inputs: vec![text],
            truncate: true,
            normalize: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::EmbeddingUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::EmbeddingUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let batch: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::EmbeddingUnavailable(format!("undecodable response: {}", e)))?;

        first_embedding(batch)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "tei"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = EmbedRequest {
            inputs: vec!["hello"],
            truncate: true,
            normalize: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], serde_json::json!(["hello"]));
        assert_eq!(json["truncate"], true);
        assert_eq!(json["normalize"], true);
    }

    #[test]
    fn test_first_embedding_returns_first_vector() {
        let batch = vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]];
        let embedding = first_embedding(batch).unwrap();
        assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let result = first_embedding(Vec::new());
        assert!(matches!(result, Err(Error::EmbeddingUnavailable(_))));
    }

    #[test]
    fn test_empty_first_vector_is_an_error() {
        let result = first_embedding(vec![Vec::new()]);
        assert!(matches!(result, Err(Error::EmbeddingUnavailable(_))));
    }
}
