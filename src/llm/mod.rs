//! LLM Provider Abstraction
//!
//! One uniform contract for every vendor: `generate(system_prompt, messages)
//! -> text`. The `ProviderFactory` selects the adapter for a provider
//! identifier and resolves the credential; each adapter instance serves a
//! single request and owns exactly one credential and one model identifier.
//!
//! Vendor failures never escape an adapter as a raised fault: `generate`
//! returns an explicit `Result<String, VendorError>`, and the HTTP boundary
//! decides how to render the error side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod anthropic;
mod openai;
mod provider;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;
pub use provider::{Provider, DEFAULT_PROVIDER_ID};

/// One turn of conversation history. Order is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.to_string(),
        }
    }

    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }
}

/// Failure during the actual vendor call: transport, auth, rate limit, or a
/// malformed response. Callers render this, they never re-raise it.
#[derive(Debug, Clone, Error)]
#[error("Error querying {provider} API: {message}")]
pub struct VendorError {
    /// Human-readable vendor name ("OpenAI", "Anthropic").
    pub provider: &'static str,
    pub message: String,
}

/// Uniform generation contract implemented by every vendor adapter.
#[async_trait]
pub trait LlmClient: Send + Sync + std::fmt::Debug {
    /// Send the system prompt plus ordered history to the vendor and return
    /// the primary generated text, trimmed of surrounding whitespace.
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, VendorError>;
}

/// Construction-time failures. No network activity happens here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
    #[error("API key is required for {}: supply apiKey or set {}", .0.display_name(), .0.env_var())]
    MissingCredential(Provider),
}

/// Deployment-wide fallback keys, read from the environment once at startup.
#[derive(Debug, Clone, Default)]
pub struct FallbackCredentials {
    pub openai: Option<String>,
    pub anthropic: Option<String>,
}

impl FallbackCredentials {
    /// Capture `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` from the process
    /// environment. Empty values count as absent.
    pub fn from_env() -> Self {
        let read = |var: &str| std::env::var(var).ok().filter(|v| !v.is_empty());
        Self {
            openai: read(Provider::OpenAi.env_var()),
            anthropic: read(Provider::Anthropic.env_var()),
        }
    }

    pub fn for_provider(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai.as_deref(),
            Provider::Anthropic => self.anthropic.as_deref(),
        }
    }
}

/// Constructor selector for vendor adapters.
///
/// A trait so the dispatcher can be exercised in tests with a mock factory
/// and no process-wide setup.
pub trait ClientFactory: Send + Sync {
    /// Build the adapter for `provider_id`, resolving the credential: the
    /// per-request key wins, else the startup fallback for that vendor.
    fn create(
        &self,
        provider_id: &str,
        model: Option<&str>,
        api_key: &str,
    ) -> Result<Box<dyn LlmClient>, FactoryError>;

    /// Whether a fallback credential is configured for `provider_id`.
    /// Unknown identifiers have none.
    fn has_fallback(&self, _provider_id: &str) -> bool {
        false
    }
}

/// The production factory over the closed `Provider` set.
pub struct ProviderFactory {
    fallback: FallbackCredentials,
}

impl ProviderFactory {
    pub fn new(fallback: FallbackCredentials) -> Self {
        Self { fallback }
    }
}

impl ClientFactory for ProviderFactory {
    fn create(
        &self,
        provider_id: &str,
        model: Option<&str>,
        api_key: &str,
    ) -> Result<Box<dyn LlmClient>, FactoryError> {
        let provider = Provider::parse(provider_id)
            .ok_or_else(|| FactoryError::UnsupportedProvider(provider_id.to_string()))?;

        let key = if !api_key.is_empty() {
            api_key.to_string()
        } else {
            self.fallback
                .for_provider(provider)
                .map(str::to_string)
                .ok_or(FactoryError::MissingCredential(provider))?
        };

        let model = model.unwrap_or_else(|| provider.default_model()).to_string();

        Ok(match provider {
            Provider::OpenAi => Box::new(OpenAiClient::new(key, model)),
            Provider::Anthropic => Box::new(AnthropicClient::new(key, model)),
        })
    }

    fn has_fallback(&self, provider_id: &str) -> bool {
        Provider::parse(provider_id)
            .map(|p| self.fallback.for_provider(p).is_some())
            .unwrap_or(false)
    }
}
