//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use crate::core::{Bot as CoreBot, Chat, DbotError, RenderMode, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, ParseMode},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    // Legacy Markdown tolerates more unescaped text than MarkdownV2.
    #[allow(deprecated)]
    async fn send_message(&self, chat: &Chat, text: &str, mode: RenderMode) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let request = match mode {
            RenderMode::Plain => request,
            RenderMode::Markdown => request.parse_mode(ParseMode::Markdown),
        };
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
