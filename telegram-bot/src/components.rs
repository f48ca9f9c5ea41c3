//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{Bot, Handler};
use crate::delivery::Dispatcher;
use crate::telegram::{build_teloxide_bot, TelegramBotAdapter};

/// Core dependencies handed to handler factories.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Bot used by handlers to send; the Telegram adapter unless overridden (tests).
    pub bot: Arc<dyn Bot>,
    pub dispatcher: Dispatcher,
}

/// Builds BotComponents. When `bot_override` is `Some`, handlers send through it instead of Telegram.
#[instrument(skip(config, bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url())?;
    let bot: Arc<dyn Bot> = match bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };
    let dispatcher = Dispatcher::new(bot.clone()).with_chunk_size(config.chunk_size());
    info!(
        chunk_size = config.chunk_size(),
        custom_api_url = config.telegram_api_url().is_some(),
        "Bot components built"
    );
    Ok(BotComponents {
        teloxide_bot,
        bot,
        dispatcher,
    })
}

/// Builds the handler chain from handlers in order.
pub fn build_handler_chain(handlers: Vec<Arc<dyn Handler>>) -> HandlerChain {
    handlers
        .into_iter()
        .fold(HandlerChain::new(), |chain, h| chain.add_handler(h))
}
