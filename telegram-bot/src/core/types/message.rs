//! Message and direction types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// A single chat message. Transient; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Raw text; empty for non-text messages.
    pub content: String,
    pub message_type: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.content.trim()
    }

    /// True for `/command` style messages.
    pub fn is_command(&self) -> bool {
        self.text().starts_with('/')
    }
}
