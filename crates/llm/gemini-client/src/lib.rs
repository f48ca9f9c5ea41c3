//! # Gemini API client
//!
//! Thin wrapper around [reqwest] for the Google Gemini REST API: model listing and
//! non-streamed `generateContent`. Provides token masking for safe logging.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::time::Duration;

mod error;
mod types;

pub use error::GeminiError;
pub use types::{
    bare_model_id, Candidate, Content, GenerateContentRequest, GenerateContentResponse, Model,
    Part, PromptFeedback, UsageMetadata, GENERATE_CONTENT_METHOD, MODEL_NAME_PREFIX,
};
use types::{ApiErrorEnvelope, ListModelsResponse};

/// Public Gemini endpoint (v1beta exposes the widest model list).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key, so the key never appears in request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

const LIST_MODELS_PAGE_SIZE: u32 = 1000;

/// Cap on the error message kept from a non-JSON error body (proxies may return whole HTML pages).
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Gemini REST client. Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client using the given API key and [`DEFAULT_BASE_URL`].
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. a proxy or a mock server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Rebuilds the HTTP client with a whole-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, GeminiError> {
        self.http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Lists every model visible to the API key, following `nextPageToken` until exhausted.
    pub async fn list_models(&self) -> Result<Vec<Model>, GeminiError> {
        tracing::info!(
            api_key = %mask_token(&self.api_key),
            "Gemini list_models request"
        );

        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self
                .http
                .get(self.url("models"))
                .header(API_KEY_HEADER, &self.api_key)
                .query(&[("pageSize", LIST_MODELS_PAGE_SIZE.to_string())]);
            if let Some(ref token) = page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: ListModelsResponse = Self::read_json(request.send().await?).await?;
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        tracing::info!(count = models.len(), "Gemini list_models done");
        Ok(models)
    }

    /// Sends a `generateContent` request. `model` may be bare or namespaced.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let model_id = bare_model_id(model);
        tracing::info!(
            model = %model_id,
            content_count = request.contents.len(),
            api_key = %mask_token(&self.api_key),
            "Gemini generate_content request"
        );

        let response = self
            .http
            .post(self.url(&format!("models/{}:generateContent", model_id)))
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;
        let body: GenerateContentResponse = Self::read_json(response).await?;

        if let Some(ref u) = body.usage_metadata {
            tracing::info!(
                prompt_tokens = u.prompt_token_count,
                completion_tokens = u.candidates_token_count,
                total_tokens = u.total_token_count,
                "Gemini generate_content usage"
            );
        }

        Ok(body)
    }

    /// Sends the given text parts as one user turn and returns the reply text.
    ///
    /// A prompt blocked before generation is an error; a candidate without text yields an empty string.
    pub async fn generate_text(&self, model: &str, parts: &[String]) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_parts(parts.iter().cloned())],
            system_instruction: None,
        };
        let response = self.generate_content(model, &request).await?;
        if response.candidates.is_empty() {
            if let Some(reason) = response.block_reason() {
                return Err(GeminiError::Blocked(reason.to_string()));
            }
        }
        Ok(response.text())
    }

    /// Maps non-2xx responses to [`GeminiError::Api`], otherwise decodes the JSON body.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GeminiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let (api_status, message) = match serde_json::from_str::<ApiErrorEnvelope>(&body) {
                Ok(envelope) => (envelope.error.status, envelope.error.message),
                Err(_) => (None, truncate_body(&body)),
            };
            tracing::warn!(
                status = status.as_u16(),
                api_status = ?api_status,
                message = %message,
                "Gemini API returned an error"
            );
            return Err(GeminiError::Api {
                status: status.as_u16(),
                api_status,
                message,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
