//! Generation call with bounded model fallback.
//!
//! The call walks [`GenerationState`]: a not-found failure moves to `FailedRetry`, which tries a
//! short fixed list of fallback models in order; any other failure is fatal immediately.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use gemini_client::bare_model_id;

use super::{GenerationProvider, ModelInfo, ModelResolver, ModelState, ProviderError};

/// Models tried, in order, after the resolved model is reported not found.
pub const DEFAULT_FALLBACK_MODELS: &[&str] =
    &["gemini-1.5-flash-latest", "gemini-1.0-pro", "gemini-pro"];

/// Successful generation: reply text and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub model: String,
}

/// States of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    /// Model chosen, not yet called.
    Resolved(String),
    /// Provider invoked with this model.
    Calling(String),
    /// Primary model not found; `next` indexes the next fallback candidate.
    FailedRetry {
        original: ProviderError,
        failed_model: String,
        next: usize,
    },
    Done(Generation),
    FailedFatal(ProviderError),
}

/// Resolves the model through [`ModelState`] and runs the fallback state machine.
#[derive(Clone)]
pub struct FallbackGenerator {
    provider: Arc<dyn GenerationProvider>,
    resolver: ModelResolver,
    state: ModelState,
    fallback_models: Vec<String>,
}

impl FallbackGenerator {
    pub fn new(provider: Arc<dyn GenerationProvider>, state: ModelState) -> Self {
        Self {
            provider,
            resolver: ModelResolver::default(),
            state,
            fallback_models: DEFAULT_FALLBACK_MODELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn with_resolver(mut self, resolver: ModelResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_fallback_models(mut self, models: Vec<String>) -> Self {
        self.fallback_models = models;
        self
    }

    pub fn model_state(&self) -> &ModelState {
        &self.state
    }

    /// Sets the operator preference; the next call re-resolves.
    pub async fn set_preference(&self, preference: &str) {
        self.state.set_preference(preference).await;
    }

    /// Advertised models, straight from the provider.
    pub async fn available_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        self.provider.list_models().await
    }

    /// Returns the resolved model, resolving (and recording) it first when needed.
    pub async fn current_model(&self) -> String {
        let selection = self.state.snapshot().await;
        self.resolved_for(&selection.preference, selection.resolved)
            .await
    }

    async fn resolved_for(&self, preference: &str, resolved: Option<String>) -> String {
        if let Some(model) = resolved {
            return model;
        }
        let model = self
            .resolver
            .resolve_with(preference, self.provider.as_ref())
            .await;
        self.state.record_resolved(preference, &model).await;
        model
    }

    /// Generates a reply for `prompt_parts`, falling back across [`DEFAULT_FALLBACK_MODELS`]
    /// (or the configured list) when the model is not found.
    ///
    /// On fallback success the succeeding model becomes the resolved model. On exhaustion the
    /// original not-found error is returned.
    #[instrument(skip(self, prompt_parts))]
    pub async fn generate(&self, prompt_parts: &[String]) -> Result<Generation, ProviderError> {
        let selection = self.state.snapshot().await;
        let preference = selection.preference.clone();
        let model = self.resolved_for(&preference, selection.resolved).await;

        let mut state = GenerationState::Resolved(model);
        loop {
            state = match state {
                GenerationState::Resolved(model) => GenerationState::Calling(model),
                GenerationState::Calling(model) => {
                    info!(model = %model, "Calling generation provider");
                    match self.provider.generate(&model, prompt_parts).await {
                        Ok(text) => GenerationState::Done(Generation { text, model }),
                        Err(e) if e.is_not_found() => {
                            warn!(model = %model, error = %e, "Model not found; trying fallback models");
                            self.state.invalidate(&preference).await;
                            GenerationState::FailedRetry {
                                original: e,
                                failed_model: model,
                                next: 0,
                            }
                        }
                        Err(e) => GenerationState::FailedFatal(e),
                    }
                }
                GenerationState::FailedRetry {
                    original,
                    failed_model,
                    next,
                } => {
                    let candidate = self
                        .fallback_models
                        .iter()
                        .enumerate()
                        .skip(next)
                        .find(|(_, c)| bare_model_id(c) != bare_model_id(&failed_model));
                    match candidate {
                        None => {
                            warn!(failed_model = %failed_model, "Fallback models exhausted");
                            GenerationState::FailedFatal(original)
                        }
                        Some((index, candidate)) => {
                            info!(model = %candidate, attempt = index + 1, "Trying fallback model");
                            match self.provider.generate(candidate, prompt_parts).await {
                                Ok(text) => {
                                    self.state.record_resolved(&preference, candidate).await;
                                    GenerationState::Done(Generation {
                                        text,
                                        model: candidate.clone(),
                                    })
                                }
                                Err(e) => {
                                    warn!(model = %candidate, error = %e, "Fallback model failed");
                                    GenerationState::FailedRetry {
                                        original,
                                        failed_model,
                                        next: index + 1,
                                    }
                                }
                            }
                        }
                    }
                }
                GenerationState::Done(generation) => return Ok(generation),
                GenerationState::FailedFatal(e) => return Err(e),
            };
        }
    }
}
