//! OpenAI chat-completions adapter.
//!
//! Translates the uniform (system prompt, history) input into the
//! chat-completions wire format: the system prompt becomes the leading
//! `system` message of the turn list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, LlmClient, VendorError};
use async_trait::async_trait;

const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Low temperature for deterministic, low-variance technical answers.
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 4000;

/// Per-request OpenAI adapter. Owns one credential and one model id.
#[derive(Debug)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(OPENAI_BASE_URL.to_string(), api_key, model)
    }

    /// Point the adapter at a different base URL (mock server in tests,
    /// OpenAI-compatible gateways in deployment).
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
    ) -> OpenAiRequest {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(ChatMessage::system(system_prompt));
        wire.extend(messages.iter().cloned());

        OpenAiRequest {
            model: self.model.clone(),
            messages: wire,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    fn vendor_error(&self, message: impl Into<String>) -> VendorError {
        VendorError {
            provider: "OpenAI",
            message: message.into(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, VendorError> {
        let request = self.build_request(system_prompt, messages);
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));

        debug!("OpenAI request: model={}, {} turns", self.model, messages.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.vendor_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.vendor_error(format!("HTTP {}: {}", status, body)));
        }

        let parsed: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| self.vendor_error(format!("invalid response: {}", e)))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| self.vendor_error("no choices in response"))?;

        Ok(content.trim().to_string())
    }
}
