//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use anyhow::{Context, Result};
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Creates a teloxide Bot, pointing it at `api_url` when given.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Publishes the command menu. Failures are logged and otherwise ignored.
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) {
    let commands: Vec<BotCommand> = commands
        .iter()
        .map(|(command, description)| BotCommand::new(*command, *description))
        .collect();
    let count = commands.len();
    match bot.set_my_commands(commands).await {
        Ok(_) => info!(count, "Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Each message is converted to core::Message and passed to chain.handle in its own task, so
/// a slow generation in one chat never blocks another.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected as bot");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        chat_type = %core_msg.chat.chat_type,
                        text_len = text.chars().count(),
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message"
                    );
                }
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
