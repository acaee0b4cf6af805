//! Provider/model catalog
//!
//! Read-only view of which models are available to workflow nodes. In the
//! full system this is fed from provider configuration; the built-in catalog
//! here is mock data with the same shape. Panels receive the registry as an
//! explicit parameter, never through a global.

use crate::model::{ModelType, ProviderModel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested provider has no entry in the catalog
    #[error("unknown model provider: {0}")]
    UnknownProvider(String),
}

/// The catalog of available models, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRegistry {
    models: Vec<ProviderModel>,
}

impl ModelRegistry {
    /// Build a registry from an explicit list of catalog entries.
    pub fn new(models: Vec<ProviderModel>) -> Self {
        Self { models }
    }

    /// Built-in mock catalog used until provider configuration is wired in.
    pub fn mock() -> Self {
        Self::new(vec![
            ProviderModel::new("openai", "gpt-4o", ModelType::TextGeneration),
            ProviderModel::new("openai", "gpt-4o-mini", ModelType::TextGeneration),
            ProviderModel::new("openai", "text-embedding-3-small", ModelType::TextEmbedding),
            ProviderModel::new("anthropic", "claude-3-5-sonnet", ModelType::TextGeneration),
            ProviderModel::new("anthropic", "claude-3-haiku", ModelType::TextGeneration),
            ProviderModel::new("cohere", "rerank-english-v3.0", ModelType::Rerank),
        ])
    }

    /// All catalog entries.
    pub fn models(&self) -> &[ProviderModel] {
        &self.models
    }

    /// The text-generation subset, in catalog order. This is what model
    /// selectors on generation nodes are populated with.
    pub fn text_generation_models(&self) -> Vec<&ProviderModel> {
        self.models
            .iter()
            .filter(|m| m.model_type == ModelType::TextGeneration)
            .collect()
    }

    /// Entries for one provider, or an error if the provider is unknown.
    pub fn models_for_provider(
        &self,
        provider: &str,
    ) -> Result<Vec<&ProviderModel>, RegistryError> {
        let models: Vec<&ProviderModel> = self
            .models
            .iter()
            .filter(|m| m.provider == provider)
            .collect();
        if models.is_empty() {
            return Err(RegistryError::UnknownProvider(provider.to_string()));
        }
        Ok(models)
    }

    /// Look up a single entry by provider and model id.
    pub fn find(&self, provider: &str, model_id: &str) -> Option<&ProviderModel> {
        self.models
            .iter()
            .find(|m| m.provider == provider && m.model_id == model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_has_text_generation_models() {
        let registry = ModelRegistry::mock();
        let generation = registry.text_generation_models();
        assert!(!generation.is_empty());
        assert!(generation
            .iter()
            .all(|m| m.model_type == ModelType::TextGeneration));
    }

    #[test]
    fn test_text_generation_filter_excludes_other_types() {
        let registry = ModelRegistry::mock();
        let generation = registry.text_generation_models();
        assert!(!generation
            .iter()
            .any(|m| m.model_id == "text-embedding-3-small"));
        assert!(!generation.iter().any(|m| m.model_id == "rerank-english-v3.0"));
    }

    #[test]
    fn test_models_for_provider_preserves_catalog_order() {
        let registry = ModelRegistry::mock();
        let openai = registry.models_for_provider("openai").unwrap();
        let ids: Vec<&str> = openai.iter().map(|m| m.model_id.as_str()).collect();
        assert_eq!(ids, ["gpt-4o", "gpt-4o-mini", "text-embedding-3-small"]);
    }

    #[test]
    fn test_unknown_provider_is_an_error() {
        let registry = ModelRegistry::mock();
        assert_eq!(
            registry.models_for_provider("acme"),
            Err(RegistryError::UnknownProvider("acme".to_string()))
        );
    }

    #[test]
    fn test_find_entry() {
        let registry = ModelRegistry::mock();
        assert!(registry.find("anthropic", "claude-3-haiku").is_some());
        assert!(registry.find("anthropic", "gpt-4o").is_none());
    }
}
