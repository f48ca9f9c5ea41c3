//! Model resolution: picks the model to call from a preference and the advertised model list.

use gemini_client::bare_model_id;
use tracing::{info, instrument, warn};

use super::{GenerationProvider, ModelInfo};

/// Last-resort identifier when the availability list is empty or unobtainable.
pub const LEGACY_MODEL: &str = "gemini-pro";

/// Static candidates tried after the preference, in priority order.
pub const DEFAULT_RESOLVER_CANDIDATES: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro",
    "gemini-1.5-pro-latest",
    "gemini-1.0-pro",
];

/// Resolves a model preference against the provider's availability list. Never fails.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    candidates: Vec<String>,
    legacy: String,
}

impl Default for ModelResolver {
    fn default() -> Self {
        Self::new(
            DEFAULT_RESOLVER_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            LEGACY_MODEL.to_string(),
        )
    }
}

impl ModelResolver {
    pub fn new(candidates: Vec<String>, legacy: String) -> Self {
        Self { candidates, legacy }
    }

    pub fn legacy(&self) -> &str {
        &self.legacy
    }

    /// `[preference] ++ static candidates`.
    pub fn candidate_list(&self, preference: &str) -> Vec<String> {
        std::iter::once(preference.to_string())
            .chain(self.candidates.iter().cloned())
            .collect()
    }

    /// Returns, in order of precedence: the first candidate advertised (bare or `models/` form),
    /// the first advertised model supporting generation, or the legacy identifier.
    /// `None` means the list could not be obtained.
    pub fn resolve(&self, preference: &str, available: Option<&[ModelInfo]>) -> String {
        let available = match available {
            Some(list) if !list.is_empty() => list,
            _ => return self.legacy.clone(),
        };

        for candidate in self.candidate_list(preference) {
            let wanted = bare_model_id(&candidate);
            if available.iter().any(|m| m.bare_id() == wanted) {
                return wanted.to_string();
            }
        }

        available
            .iter()
            .find(|m| m.supports_generation)
            .map(|m| m.bare_id().to_string())
            .unwrap_or_else(|| self.legacy.clone())
    }

    /// Fetches the availability list from `provider` and resolves against it.
    /// A failed listing degrades to the legacy identifier.
    #[instrument(skip(self, provider))]
    pub async fn resolve_with(&self, preference: &str, provider: &dyn GenerationProvider) -> String {
        let available = match provider.list_models().await {
            Ok(models) => Some(models),
            Err(e) => {
                warn!(error = %e, "Failed to list models; falling back to legacy model");
                None
            }
        };
        let resolved = self.resolve(preference, available.as_deref());
        info!(
            preference = %preference,
            resolved = %resolved,
            advertised = available.as_ref().map(|m| m.len()).unwrap_or(0),
            "Model resolved"
        );
        resolved
    }
}
