//! # LLM client abstraction
//!
//! Defines the [`GenerationProvider`] trait and a Gemini implementation, plus the pieces that
//! decide which model to call: [`ModelResolver`] (preference + availability list → model),
//! [`ModelState`] (process-wide selection cell) and [`FallbackGenerator`] (bounded retry over a
//! fixed fallback list when a model is not found).
//!
//! Transport-agnostic; used by telegram-llm-bot.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod config;
mod fallback;
mod gemini_llm;
mod model_state;
mod resolver;

pub use config::{EnvLlmConfig, LlmConfig};
pub use fallback::{FallbackGenerator, Generation, GenerationState, DEFAULT_FALLBACK_MODELS};
pub use gemini_llm::{GeminiLlmClient, DEFAULT_SYSTEM_CONTENT};
pub use model_state::{ModelSelection, ModelState};
pub use resolver::{ModelResolver, DEFAULT_RESOLVER_CANDIDATES, LEGACY_MODEL};

/// One entry of the provider's advertised model list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Identifier as advertised; may be namespaced (`models/gemini-1.5-flash`).
    pub identifier: String,
    /// Whether the model can be used for text generation.
    pub supports_generation: bool,
}

impl ModelInfo {
    pub fn new(identifier: impl Into<String>, supports_generation: bool) -> Self {
        Self {
            identifier: identifier.into(),
            supports_generation,
        }
    }

    /// Identifier without the `models/` namespace.
    pub fn bare_id(&self) -> &str {
        gemini_client::bare_model_id(&self.identifier)
    }
}

/// Classified provider failure. Only [`ProviderError::NotFound`] triggers model fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The model identifier is unknown or unsupported for these credentials.
    #[error("Model {model} is not available: {message}")]
    NotFound { model: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }
}

/// Generation provider interface: list advertised models and generate text from prompt parts.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Models currently visible to the caller's credentials.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Generates a reply for the ordered prompt parts using `model`.
    async fn generate(&self, model: &str, prompt_parts: &[String]) -> Result<String, ProviderError>;
}
