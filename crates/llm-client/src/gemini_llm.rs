//! Gemini implementation of [`GenerationProvider`]: wraps gemini-client and prepends the system part.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError};
use std::time::Duration;
use tracing::instrument;

use super::{GenerationProvider, ModelInfo, ProviderError};

/// Default system instruction sent as the first prompt part.
pub const DEFAULT_SYSTEM_CONTENT: &str = "You are a helpful and concise assistant.";

/// [`GenerationProvider`] backed by [`GeminiClient`].
#[derive(Clone)]
pub struct GeminiLlmClient {
    client: GeminiClient,
    system_prompt: Option<String>,
}

impl GeminiLlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, base_url),
            system_prompt: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, GeminiError> {
        self.client = self.client.with_timeout(timeout)?;
        Ok(self)
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn system_content(&self) -> &str {
        self.system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_CONTENT)
    }

    fn classify(model: &str, e: GeminiError) -> ProviderError {
        if e.is_not_found() {
            ProviderError::NotFound {
                model: model.to_string(),
                message: e.to_string(),
            }
        } else {
            ProviderError::Other(e.to_string())
        }
    }
}

#[async_trait]
impl GenerationProvider for GeminiLlmClient {
    #[instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        let models = self
            .client
            .list_models()
            .await
            .map_err(|e| ProviderError::Other(e.to_string()))?;
        Ok(models
            .iter()
            .map(|m| ModelInfo::new(m.name.clone(), m.supports_generate_content()))
            .collect())
    }

    #[instrument(skip(self, prompt_parts))]
    async fn generate(&self, model: &str, prompt_parts: &[String]) -> Result<String, ProviderError> {
        let mut parts = Vec::with_capacity(prompt_parts.len() + 1);
        parts.push(self.system_content().to_string());
        parts.extend(prompt_parts.iter().cloned());
        self.client
            .generate_text(model, &parts)
            .await
            .map_err(|e| Self::classify(model, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_content_default_and_override() {
        let client = GeminiLlmClient::new("k".to_string());
        assert_eq!(client.system_content(), DEFAULT_SYSTEM_CONTENT);

        let client = client.with_system_prompt_opt(Some("Reply in Indonesian.".to_string()));
        assert_eq!(client.system_content(), "Reply in Indonesian.");
    }

    #[test]
    fn test_classify_not_found_vs_other() {
        let not_found = GeminiError::Api {
            status: 404,
            api_status: Some("NOT_FOUND".to_string()),
            message: "models/x is not found".to_string(),
        };
        assert!(GeminiLlmClient::classify("x", not_found).is_not_found());

        let quota = GeminiError::Api {
            status: 429,
            api_status: Some("RESOURCE_EXHAUSTED".to_string()),
            message: "quota".to_string(),
        };
        assert_eq!(
            GeminiLlmClient::classify("x", quota),
            ProviderError::Other("Gemini API error (429): quota".to_string())
        );
    }
}
