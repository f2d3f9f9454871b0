//! Weaviate GraphQL search client
//!
//! Issues a `Get` query with a `nearVector` argument against the configured
//! collection and walks the loosely-structured response with explicit shape
//! checks. A response that deviates structurally is `MalformedSearchResponse`;
//! individual results without usable text are skipped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::error::{Error, Result};

use super::vector_search::VectorSearchProvider;

/// Vector search provider backed by a Weaviate instance
pub struct WeaviateSearcher {
    client: Client,
    base_url: String,
    collection: String,
    limit: usize,
}

impl WeaviateSearcher {
    /// Create a new Weaviate searcher with its own pooled HTTP client
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build Weaviate HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            collection: config.collection.clone(),
            limit: config.limit,
        })
    }

    /// Build the GraphQL query requesting only the text field of the
    /// nearest matches.
    fn build_query(&self, vector: &[f32]) -> Result<String> {
        let vector_json = serde_json::to_string(vector)
            .map_err(|e| Error::Internal(format!("failed to serialize query vector: {}", e)))?;

        Ok(format!(
            "{{ Get {{ {}(nearVector: {{vector: {}}}, limit: {}) {{ text }} }} }}",
            self.collection, vector_json, self.limit
        ))
    }
}

/// Walk the GraphQL response down to the matched objects and collect their
/// text fields.
///
/// Expected shape: `{"data": {"Get": {"<Collection>": [{"text": "..."}]}}}`.
/// A result entry lacking a non-empty string `text` is skipped rather than
/// failing the query; an empty match list is a valid empty result.
fn extract_passages(body: &Value, collection: &str) -> Result<Vec<String>> {
    // Weaviate reports query-level failures as a GraphQL errors array,
    // usually alongside HTTP 200.
    if let Some(errors) = body.get("errors") {
        return Err(Error::SearchUnavailable(format!(
            "GraphQL errors: {}",
            errors
        )));
    }

    let data = body
        .get("data")
        .ok_or_else(|| Error::MalformedSearchResponse("missing data field".to_string()))?;

    let get = data
        .get("Get")
        .ok_or_else(|| Error::MalformedSearchResponse("missing Get field".to_string()))?;

    let matches = get
        .get(collection)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::MalformedSearchResponse(format!("missing collection {}", collection))
        })?;

    let mut passages = Vec::with_capacity(matches.len());
    for item in matches {
        match item.get("text").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => passages.push(text.to_string()),
            _ => {
                tracing::warn!("skipping search result without usable text field");
            }
        }
    }

    Ok(passages)
}

#[async_trait]
impl VectorSearchProvider for WeaviateSearcher {
    async fn search(&self, embedding: &[f64]) -> Result<Vec<String>> {
        // Lossy narrowing: the index stores 32-bit vectors, the embedding
        // service produces 64-bit floats.
        let vector: Vec<f32> = embedding.iter().map(|&v| v as f32).collect();

        let query = self.build_query(&vector)?;
        let url = format!("{}/v1/graphql", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| Error::SearchUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::SearchUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::MalformedSearchResponse(format!("not valid JSON: {}", e)))?;

        let passages = extract_passages(&body, &self.collection)?;
        tracing::debug!(passages = passages.len(), "vector search returned");
        Ok(passages)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/v1/.well-known/ready", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "weaviate"
    }
}
