//! HTTP handlers for the gateway

use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{QueryRequest, QueryResponse};

/// POST /query - answer a question with retrieval-augmented generation
pub async fn answer_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let question = request.query.trim();
    if question.is_empty() {
        return Err(Error::InvalidQuery("query must not be empty".to_string()));
    }

    let start = Instant::now();
    tracing::info!("query: \"{}\"", question);

    let answer = state.pipeline().answer(question).await?;

    tracing::info!(
        "query answered in {}ms",
        start.elapsed().as_millis()
    );

    Ok(Json(QueryResponse { response: answer }))
}

/// GET /health - liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /ready - readiness probe covering all three downstream services
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let report = state.pipeline().health_report().await;
    for (name, healthy) in &report {
        if !healthy {
            tracing::warn!("dependency not ready: {}", name);
        }
    }

    if report.iter().all(|(_, healthy)| *healthy) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
