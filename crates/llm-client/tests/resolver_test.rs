//! Tests for [`llm_client::ModelResolver`]: candidate priority, generation-capable fallback,
//! legacy identifier when the availability list is empty or cannot be fetched.

use async_trait::async_trait;
use llm_client::{GenerationProvider, ModelInfo, ModelResolver, ProviderError, LEGACY_MODEL};

/// **Test: the preference is returned when advertised.**
#[test]
fn resolve_returns_advertised_preference() {
    let resolver = ModelResolver::default();
    let available = vec![
        ModelInfo::new("models/gemini-1.5-flash", true),
        ModelInfo::new("models/gemini-1.5-pro", true),
    ];

    assert_eq!(
        resolver.resolve("gemini-1.5-pro", Some(&available)),
        "gemini-1.5-pro"
    );
}

/// **Test: an empty availability list yields the legacy identifier.**
#[test]
fn resolve_empty_list_returns_legacy() {
    let resolver = ModelResolver::default();

    assert_eq!(resolver.resolve("gemini-1.5-pro", Some(&[])), LEGACY_MODEL);
}

/// **Test: with no static candidate advertised, the first generation-capable entry is returned.**
#[test]
fn resolve_falls_back_to_first_generation_capable_entry() {
    let resolver = ModelResolver::default();
    let available = vec![
        ModelInfo::new("models/text-embedding-004", false),
        ModelInfo::new("models/gemini-2.0-flash", true),
        ModelInfo::new("models/gemini-2.0-pro", true),
    ];

    assert_eq!(
        resolver.resolve("model-X", Some(&available)),
        "gemini-2.0-flash"
    );
}

/// **Test: same inputs give the same output.**
#[test]
fn resolve_is_idempotent() {
    let resolver = ModelResolver::default();
    let available = vec![ModelInfo::new("models/gemini-1.0-pro", true)];

    let first = resolver.resolve("model-X", Some(&available));
    let second = resolver.resolve("model-X", Some(&available));
    assert_eq!(first, second);
    assert_eq!(first, "gemini-1.0-pro");
}

struct UnreachableProvider;

#[async_trait]
impl GenerationProvider for UnreachableProvider {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        Err(ProviderError::Other("connection refused".to_string()))
    }

    async fn generate(&self, _model: &str, _parts: &[String]) -> Result<String, ProviderError> {
        Err(ProviderError::Other("connection refused".to_string()))
    }
}

/// **Test: a provider that cannot list models degrades to the legacy identifier.**
#[tokio::test]
async fn resolve_with_unreachable_provider_returns_legacy() {
    let resolver = ModelResolver::default();

    let resolved = resolver
        .resolve_with("gemini-1.5-flash", &UnreachableProvider)
        .await;

    assert_eq!(resolved, LEGACY_MODEL);
}
