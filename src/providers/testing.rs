//! Stub providers for driving the pipeline in tests without a network

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::Result;

use super::{EmbeddingProvider, LlmProvider, VectorSearchProvider};

/// Shared record of which stages ran, in order.
pub(crate) type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub(crate) fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) struct StubEmbedder {
    result: Mutex<Option<Result<Vec<f64>>>>,
    log: CallLog,
}

impl StubEmbedder {
    pub(crate) fn new(result: Result<Vec<f64>>, log: CallLog) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            log,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f64>> {
        self.log.lock().unwrap().push("embed");
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("embed called more than once")
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "stub-embedder"
    }
}

pub(crate) struct StubSearcher {
    result: Mutex<Option<Result<Vec<String>>>>,
    /// Embedding the pipeline handed over, for input-forwarding assertions.
    pub(crate) received: Mutex<Option<Vec<f64>>>,
    log: CallLog,
}

impl StubSearcher {
    pub(crate) fn new(result: Result<Vec<String>>, log: CallLog) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            received: Mutex::new(None),
            log,
        }
    }
}

#[async_trait]
impl VectorSearchProvider for StubSearcher {
    async fn search(&self, embedding: &[f64]) -> Result<Vec<String>> {
        self.log.lock().unwrap().push("search");
        *self.received.lock().unwrap() = Some(embedding.to_vec());
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("search called more than once")
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "stub-searcher"
    }
}

pub(crate) struct StubLlm {
    result: Mutex<Option<Result<String>>>,
    /// Prompts the pipeline handed over, for prompt-content assertions.
    pub(crate) prompts: Mutex<Vec<String>>,
    log: CallLog,
}

impl StubLlm {
    pub(crate) fn new(result: Result<String>, log: CallLog) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            prompts: Mutex::new(Vec::new()),
            log,
        }
    }
}

#[async_trait]
impl LlmProvider for StubLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.log.lock().unwrap().push("generate");
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("generate called more than once")
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "stub-llm"
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}
