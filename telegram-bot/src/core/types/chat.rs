//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat identity. `id` is the transport's chat id; replies go back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// `private`, `group`, `supergroup` or `channel`.
    pub chat_type: String,
}

impl Chat {
    pub fn new(id: i64, chat_type: impl Into<String>) -> Self {
        Self {
            id,
            chat_type: chat_type.into(),
        }
    }
}
