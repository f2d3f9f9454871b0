//! OpenAI-compatible chat completion client (vLLM)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::{Error, Result};

use super::llm::LlmProvider;

/// End-of-turn marker for Llama-3-style instruct models; must match the
/// markers the prompt template emits.
const STOP_SEQUENCE: &str = "<|eot_id|>";

/// Generation provider backed by an OpenAI-compatible server such as vLLM
pub struct VllmGenerator {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    stop: [&'static str; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

impl VllmGenerator {
    /// Create a new generator with its own pooled HTTP client
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build vLLM HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

/// Take the text of the first choice; zero choices is a distinct failure
/// from an unreachable service.
fn first_choice(mut response: ChatResponse) -> Result<String> {
    if response.choices.is_empty() {
        return Err(Error::EmptyGeneration);
    }
    Ok(response.choices.swap_remove(0).message.content)
}

#[async_trait]
impl LlmProvider for VllmGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            stop: [STOP_SEQUENCE],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::GenerationUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::GenerationUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::GenerationUnavailable(format!("undecodable response: {}", e)))?;

        first_choice(chat)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "vllm"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
