//! **Public API of this crate.**
//!
//! [`run_bot_with_llm`] runs the bot; [`list_models`] backs the `list-models` subcommand;
//! [`build_chain_with_provider`] and [`build_chain_with_generator`] assemble the same chain around a given
//! provider (or generator) and bot without polling Telegram.

use anyhow::{Context, Result};
use gemini_client::{GeminiClient, Model};
use llm_client::{EnvLlmConfig, FallbackGenerator, GenerationProvider, LlmConfig};
use std::sync::Arc;
use std::time::Duration;
use telegram_bot::{build_handler_chain_only, run_bot, Bot, BotConfig, HandlerChain};

use crate::assembly;
use crate::handlers::BOT_COMMANDS;

/// Runs the bot with the Gemini handlers. Load both configs (see [`crate::cli`]) before calling.
pub async fn run_bot_with_llm(config: BotConfig, llm_cfg: EnvLlmConfig) -> Result<()> {
    let provider = assembly::build_provider(&llm_cfg)?;
    run_bot(config, BOT_COMMANDS, move |_config, components| {
        assembly::log_llm_config(&llm_cfg);
        let generator = assembly::build_generator(provider, llm_cfg.model());
        assembly::build_handlers(generator, components)
    })
    .await
}

/// Full model records (display name, methods, token limits) visible to the configured API key.
pub async fn list_models(llm_cfg: &EnvLlmConfig) -> Result<Vec<Model>> {
    let client = GeminiClient::with_base_url(
        llm_cfg.api_key().to_string(),
        llm_cfg.base_url().to_string(),
    )
    .with_timeout(Duration::from_secs(llm_cfg.timeout_secs()))
    .context("Failed to build Gemini HTTP client")?;
    Ok(client.list_models().await?)
}

/// Builds the handler chain used by [`run_bot_with_llm`] around `provider`, sending through `bot`.
/// Returns the generator too so callers can inspect the model selection.
pub fn build_chain_with_provider(
    config: &BotConfig,
    provider: Arc<dyn GenerationProvider>,
    model: &str,
    bot: Arc<dyn Bot>,
) -> Result<(HandlerChain, FallbackGenerator)> {
    build_chain_with_generator(config, assembly::build_generator(provider, model), bot)
}

/// Like [`build_chain_with_provider`], for a caller-built generator (custom fallback list or resolver).
pub fn build_chain_with_generator(
    config: &BotConfig,
    generator: FallbackGenerator,
    bot: Arc<dyn Bot>,
) -> Result<(HandlerChain, FallbackGenerator)> {
    let for_handlers = generator.clone();
    let chain = build_handler_chain_only(config, bot, move |_config, components| {
        assembly::build_handlers(for_handlers, components)
    })?;
    Ok((chain, generator))
}
