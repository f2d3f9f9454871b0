//! Wire envelopes for the query endpoint

use serde::{Deserialize, Serialize};

/// Request body for `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub query: String,
}

/// Response body for a successful query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The generated answer
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_roundtrip() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"query": "What is Weaviate?"}"#).unwrap();
        assert_eq!(request.query, "What is Weaviate?");
    }

    #[test]
    fn test_response_field_name() {
        let response = QueryResponse {
            response: "An open-source vector database.".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["response"], "An open-source vector database.");
    }
}
