//! Bot abstraction for sending messages.
//!
//! [`Bot`] trait is transport-agnostic; `crate::telegram::TelegramBotAdapter` implements it via teloxide.

use crate::core::error::Result;
use crate::core::types::Chat;
use async_trait::async_trait;

/// How the transport should render message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Sent as-is.
    Plain,
    /// Rich text; the transport may reject malformed markup.
    Markdown,
}

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat using `mode`.
    async fn send_message(&self, chat: &Chat, text: &str, mode: RenderMode) -> Result<()>;
    /// Shows a "typing…" indicator in the chat. Callers treat this as best effort.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
