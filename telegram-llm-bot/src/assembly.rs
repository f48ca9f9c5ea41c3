//! Assembly: builds the Gemini provider, the fallback generator and the handler list. Used by the [facade](crate::facade).

use anyhow::{Context, Result};
use gemini_client::mask_token;
use llm_client::{
    FallbackGenerator, GeminiLlmClient, GenerationProvider, LlmConfig, ModelState,
};
use std::sync::Arc;
use std::time::Duration;
use telegram_bot::{BotComponents, Handler};
use tracing::info;

use crate::handlers::{CommandHandler, GeminiHandler};

/// Builds the Gemini provider from config.
pub(crate) fn build_provider(llm_cfg: &dyn LlmConfig) -> Result<Arc<dyn GenerationProvider>> {
    let client = GeminiLlmClient::with_base_url(
        llm_cfg.api_key().to_string(),
        llm_cfg.base_url().to_string(),
    )
    .with_timeout(Duration::from_secs(llm_cfg.timeout_secs()))
    .context("Failed to build Gemini HTTP client")?
    .with_system_prompt_opt(llm_cfg.system_prompt().map(String::from));
    Ok(Arc::new(client))
}

/// Logs the effective Gemini config; the key only masked.
pub(crate) fn log_llm_config(llm_cfg: &dyn LlmConfig) {
    info!(
        api_key = %mask_token(llm_cfg.api_key()),
        base_url = %llm_cfg.base_url(),
        model = %llm_cfg.model(),
        custom_system_prompt = llm_cfg.system_prompt().is_some(),
        timeout_secs = llm_cfg.timeout_secs(),
        "Gemini config"
    );
}

/// Builds the generator around a fresh process-wide model selection seeded with `model`.
pub(crate) fn build_generator(
    provider: Arc<dyn GenerationProvider>,
    model: &str,
) -> FallbackGenerator {
    FallbackGenerator::new(provider, ModelState::new(model))
}

/// Handlers in chain order: commands first, then the Gemini relay.
pub(crate) fn build_handlers(
    generator: FallbackGenerator,
    components: BotComponents,
) -> Vec<Arc<dyn Handler>> {
    vec![
        Arc::new(CommandHandler::new(generator.clone(), components.bot.clone())),
        Arc::new(GeminiHandler::new(generator, components.dispatcher)),
    ]
}
