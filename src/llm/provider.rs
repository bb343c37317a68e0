//! Supported LLM vendors.
//!
//! Closed variant set: adding a vendor means adding a variant here and a
//! branch in `ProviderFactory::create`. The dispatcher never changes.

use std::fmt;

/// Provider used when the request does not name one.
pub const DEFAULT_PROVIDER_ID: &str = "openai";

/// A third-party LLM vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Anthropic,
}

impl Provider {
    /// Parse a provider identifier. Unknown identifiers return `None`; the
    /// factory turns that into `FactoryError::UnsupportedProvider` rather
    /// than silently defaulting.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Provider::OpenAi),
            "anthropic" => Some(Provider::Anthropic),
            _ => None,
        }
    }

    /// The vendor's flagship model, used when the request omits one.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o",
            Provider::Anthropic => "claude-3-opus",
        }
    }

    /// Environment variable consulted for the deployment-wide fallback key.
    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Canonical lowercase identifier, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    /// Human-readable vendor name, used in error text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
