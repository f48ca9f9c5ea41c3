use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::core::{init_tracing, Bot, Handler};
use crate::telegram::{register_commands, run_repl};

use super::components::{build_bot_components, build_handler_chain, BotComponents};
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components, create handlers via factory,
/// register `commands` with Telegram, then run the REPL.
/// The factory receives (config, BotComponents) and returns handlers in chain order.
#[instrument(skip(config, commands, make_handlers))]
pub async fn run_bot<F>(config: BotConfig, commands: &[(&str, &str)], make_handlers: F) -> Result<()>
where
    F: FnOnce(&BotConfig, BotComponents) -> Vec<Arc<dyn Handler>>,
{
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        chunk_size = config.chunk_size(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None)?;
    let teloxide_bot = components.teloxide_bot.clone();
    let handler_chain = build_handler_chain(make_handlers(&config, components));

    register_commands(&teloxide_bot, commands).await;
    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await
}

/// Builds components and handler chain without starting the REPL or logging. Used by
/// integration tests that inject a fake bot and drive the chain with core messages.
pub fn build_handler_chain_only<F>(
    config: &BotConfig,
    bot_override: Arc<dyn Bot>,
    make_handlers: F,
) -> Result<HandlerChain>
where
    F: FnOnce(&BotConfig, BotComponents) -> Vec<Arc<dyn Handler>>,
{
    config.validate()?;
    let components = build_bot_components(config, Some(bot_override))?;
    Ok(build_handler_chain(make_handlers(config, components)))
}
