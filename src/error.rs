//! Error types for the RAG gateway
//!
//! Each downstream stage of the pipeline has its own variant, so a failure
//! always names the dependency that caused it. All variants are terminal
//! for the invocation: nothing is retried and there is no best-effort
//! fallback (a failed search does not degrade to an empty-context answer).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request validation error (empty query)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Embedding service failed or returned an unusable batch
    #[error("Embedding service unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// Vector search service failed
    #[error("Vector search unavailable: {0}")]
    SearchUnavailable(String),

    /// Vector search responded, but not with the expected shape
    #[error("Malformed search response: {0}")]
    MalformedSearchResponse(String),

    /// Generation service failed
    #[error("Generation service unavailable: {0}")]
    GenerationUnavailable(String),

    /// Generation service returned zero choices
    #[error("Generation service returned no choices")]
    EmptyGeneration,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, "invalid_query", msg.clone()),
            Error::EmbeddingUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                "embedding_unavailable",
                msg.clone(),
            ),
            Error::SearchUnavailable(msg) => {
                (StatusCode::BAD_GATEWAY, "search_unavailable", msg.clone())
            }
            Error::MalformedSearchResponse(msg) => (
                StatusCode::BAD_GATEWAY,
                "malformed_search_response",
                msg.clone(),
            ),
            Error::GenerationUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                "generation_unavailable",
                msg.clone(),
            ),
            Error::EmptyGeneration => (
                StatusCode::BAD_GATEWAY,
                "empty_generation",
                self.to_string(),
            ),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
