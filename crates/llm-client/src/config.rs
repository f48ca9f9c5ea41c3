//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Default model preference when `GEMINI_MODEL` is unset: fast and cheap.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default provider HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// LLM configuration interface for the Gemini API.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    /// Initial model preference.
    fn model(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
    fn timeout_secs(&self) -> u64;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub google_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub llm_system_prompt: Option<String>,
    pub request_timeout_secs: u64,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.google_api_key
    }
    fn base_url(&self) -> &str {
        &self.gemini_base_url
    }
    fn model(&self) -> &str {
        &self.gemini_model
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
    fn timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

/// Reads the first non-blank value among `names`.
fn non_empty_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

impl EnvLlmConfig {
    /// Load from environment variables. `GOOGLE_API_KEY` (or `GEMINI_API_KEY`) is required.
    pub fn from_env() -> Result<Self> {
        let google_api_key = non_empty_var(&["GOOGLE_API_KEY", "GEMINI_API_KEY"])
            .context("GOOGLE_API_KEY not set")?;
        let gemini_base_url = non_empty_var(&["GEMINI_BASE_URL"])
            .unwrap_or_else(|| gemini_client::DEFAULT_BASE_URL.to_string());
        let gemini_model =
            non_empty_var(&["GEMINI_MODEL"]).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let llm_system_prompt = non_empty_var(&["LLM_SYSTEM_PROMPT", "SYSTEM_PROMPT"]);
        let request_timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            google_api_key,
            gemini_base_url,
            gemini_model,
            llm_system_prompt,
            request_timeout_secs,
        })
    }

    /// Overrides the initial model preference (e.g. from a CLI flag).
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.gemini_model = model;
        }
        self
    }
}
