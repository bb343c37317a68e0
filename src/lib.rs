//! Dr.Debug - AI Debugging Assistant Backend
//!
//! A single-endpoint chat backend: the caller supplies a provider, a model,
//! a mode, a message history, and an API key; the server selects the
//! mode-specific system prompt, forwards the conversation to the chosen LLM
//! vendor, and returns the generated text.
//!
//! ## Module Structure
//!
//! - `modes`: mode -> system-prompt catalog (code, ask, architect, debug)
//! - `llm`: provider abstraction - the `LlmClient` contract, the factory,
//!   and one adapter per vendor (OpenAI, Anthropic)
//! - `server`: axum routes and the request dispatcher
//! - `config`: provider -> model-list configuration served by `/api/models`
//! - `error`: request-level error taxonomy and HTTP mapping

/// Mode catalog (system prompts per assistant persona)
pub mod modes;

/// LLM provider abstraction and vendor adapters
pub mod llm;

/// HTTP server and request dispatcher
pub mod server;

/// Model listing configuration
pub mod config;

/// Error taxonomy and HTTP error envelopes
pub mod error;

pub use config::ModelsConfig;
pub use error::ChatError;
pub use llm::{
    ChatMessage, ClientFactory, FactoryError, FallbackCredentials, LlmClient, Provider,
    ProviderFactory, VendorError,
};
pub use modes::ModeCatalog;
pub use server::{router, AppState, ChatRequest, ChatResponse};
