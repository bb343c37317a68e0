//! Model Listing Configuration
//!
//! Provider -> model-list mapping served by `GET /api/models`. Loaded from
//! `config/models.json` when present, otherwise falls back to a built-in
//! default. Read-only after startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Available models per provider, as shown to the frontend model picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ModelsConfig {
    pub providers: BTreeMap<String, Vec<String>>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        let mut providers = BTreeMap::new();
        providers.insert(
            "openai".to_string(),
            vec![
                "gpt-3.5-turbo".to_string(),
                "gpt-4o".to_string(),
                "gpt-4-turbo".to_string(),
            ],
        );
        providers.insert(
            "anthropic".to_string(),
            vec![
                "claude-3-opus".to_string(),
                "claude-3-sonnet".to_string(),
                "claude-3-haiku".to_string(),
            ],
        );
        Self { providers }
    }
}

impl ModelsConfig {
    /// Load the configuration from a JSON file, falling back to the default
    /// when the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}. Using default models.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn models_for(&self, provider: &str) -> Option<&[String]> {
        self.providers.get(provider).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_both_providers() {
        let config = ModelsConfig::default();
        assert!(config.models_for("openai").unwrap().contains(&"gpt-4o".to_string()));
        assert!(config
            .models_for("anthropic")
            .unwrap()
            .contains(&"claude-3-opus".to_string()));
        assert!(config.models_for("gemini").is_none());
    }

    #[test]
    fn test_load_missing_file_uses_default() {
        let config = ModelsConfig::load(Path::new("/nonexistent/models.json"));
        assert_eq!(config, ModelsConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(&path, r#"{"openai": ["gpt-4o"]}"#).unwrap();

        let config = ModelsConfig::load(&path);
        assert_eq!(config.models_for("openai").unwrap(), ["gpt-4o".to_string()]);
        assert!(config.models_for("anthropic").is_none());
    }

    #[test]
    fn test_load_malformed_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(ModelsConfig::load(&path), ModelsConfig::default());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let json = serde_json::to_value(ModelsConfig::default()).unwrap();
        assert!(json.get("openai").is_some());
        assert!(json.get("providers").is_none());
    }
}
