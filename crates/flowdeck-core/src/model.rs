//! Model references and catalog entries
//!
//! A node stores which language model it is configured to use as a
//! `(provider, model id)` pair. The available models themselves are catalog
//! entries supplied by [`crate::registry::ModelRegistry`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability class of a model in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType {
    /// Chat / completion models, the only kind a classifier node can use
    TextGeneration,
    /// Embedding models
    TextEmbedding,
    /// Rerankers
    Rerank,
    /// Moderation endpoints
    Moderation,
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextGeneration => write!(f, "text-generation"),
            Self::TextEmbedding => write!(f, "text-embedding"),
            Self::Rerank => write!(f, "rerank"),
            Self::Moderation => write!(f, "moderation"),
        }
    }
}

/// The `(provider, model id)` pair a node is configured with.
///
/// Both fields empty means "no model selected"; the UI renders the selector
/// in its unselected state rather than treating this as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRef {
    /// Provider key, e.g. "openai"
    pub provider: String,
    /// Model identifier within the provider, e.g. "gpt-4o-mini"
    pub model_id: String,
}

impl ModelRef {
    /// Create a reference to a concrete provider/model pair.
    pub fn new(provider: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model_id: model_id.into(),
        }
    }

    /// True when neither a provider nor a model id is set.
    pub fn is_empty(&self) -> bool {
        self.provider.is_empty() && self.model_id.is_empty()
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(unselected)")
        } else {
            write!(f, "{}/{}", self.provider, self.model_id)
        }
    }
}

/// One entry in the model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderModel {
    /// Provider key
    pub provider: String,
    /// Model identifier
    pub model_id: String,
    /// Human-readable label shown in selectors
    pub label: String,
    /// Capability class
    pub model_type: ModelType,
}

impl ProviderModel {
    /// Build a catalog entry; the label defaults to the model id.
    pub fn new(
        provider: impl Into<String>,
        model_id: impl Into<String>,
        model_type: ModelType,
    ) -> Self {
        let model_id = model_id.into();
        Self {
            provider: provider.into(),
            label: model_id.clone(),
            model_id,
            model_type,
        }
    }

    /// The reference a node would store to select this entry.
    pub fn model_ref(&self) -> ModelRef {
        ModelRef::new(&self.provider, &self.model_id)
    }
}
