//! Anthropic messages adapter.
//!
//! Unlike the chat-completions format, Anthropic takes the system prompt as
//! a dedicated top-level field; the turn list carries only user/assistant
//! messages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, LlmClient, VendorError};
use async_trait::async_trait;

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 4000;

/// Per-request Anthropic adapter. Owns one credential and one model id.
#[derive(Debug)]
pub struct AnthropicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicRequest {
    pub model: String,
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(ANTHROPIC_BASE_URL.to_string(), api_key, model)
    }

    /// Point the adapter at a different base URL (mock server in tests).
    pub fn with_base_url(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    pub(crate) fn build_request(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> AnthropicRequest {
        // Only user/assistant turns are valid in the messages array; the
        // system prompt travels in its own field.
        let wire: Vec<ChatMessage> = messages
            .iter()
            .filter(|m| m.role == "user" || m.role == "assistant")
            .cloned()
            .collect();

        AnthropicRequest {
            model: self.model.clone(),
            system: system_prompt.to_string(),
            messages: wire,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    fn vendor_error(&self, message: impl Into<String>) -> VendorError {
        VendorError {
            provider: "Anthropic",
            message: message.into(),
        }
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, VendorError> {
        let request = self.build_request(system_prompt, messages);
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));

        debug!("Anthropic request: model={}, {} turns", self.model, request.messages.len());

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.vendor_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.vendor_error(format!("HTTP {}: {}", status, body)));
        }

        let parsed: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| self.vendor_error(format!("invalid response: {}", e)))?;

        let text = parsed
            .content
            .first()
            .map(|block| block.text.as_str())
            .ok_or_else(|| self.vendor_error("no content in response"))?;

        Ok(text.trim().to_string())
    }
}
