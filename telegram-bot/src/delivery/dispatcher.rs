//! Sequential chunk delivery with a Markdown → plain text fallback per chunk.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::core::{Bot, Chat, DeliveryError, RenderMode};

use super::chunker::{chunk_text, DEFAULT_CHUNK_SIZE};

/// How a chunk ended up being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Sent with Markdown rendering.
    RichText,
    /// Markdown was rejected; sent without parse mode.
    PlainText,
}

/// One piece of a reply, with its position and delivery mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundChunk {
    pub index: usize,
    pub text: String,
    pub mode: DeliveryMode,
}

/// Delivers long replies as ordered chunks through a [`Bot`].
#[derive(Clone)]
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    chunk_size: usize,
}

impl Dispatcher {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn bot(&self) -> &Arc<dyn Bot> {
        &self.bot
    }

    /// Chunks to send for `text`, all marked [`DeliveryMode::RichText`].
    pub fn plan(&self, text: &str) -> Vec<OutboundChunk> {
        chunk_text(text, self.chunk_size)
            .into_iter()
            .enumerate()
            .map(|(index, piece)| OutboundChunk {
                index,
                text: piece.to_string(),
                mode: DeliveryMode::RichText,
            })
            .collect()
    }

    /// Sends `text` to `chat` chunk by chunk, strictly in order.
    ///
    /// Each chunk is tried with Markdown first and retried once as plain text. If the plain retry
    /// also fails, delivery stops there and the error names that chunk; chunks already sent stay sent.
    /// Returns the delivered chunks with the mode each one used.
    #[instrument(skip(self, chat, text), fields(chat_id = chat.id))]
    pub async fn deliver(
        &self,
        chat: &Chat,
        text: &str,
    ) -> Result<Vec<OutboundChunk>, DeliveryError> {
        let mut delivered = Vec::new();
        for mut chunk in self.plan(text) {
            if let Err(e) = self
                .bot
                .send_message(chat, &chunk.text, RenderMode::Markdown)
                .await
            {
                warn!(index = chunk.index, error = %e, "Markdown send failed, retrying as plain text");
                self.bot
                    .send_message(chat, &chunk.text, RenderMode::Plain)
                    .await
                    .map_err(|e| DeliveryError {
                        index: chunk.index,
                        reason: e.to_string(),
                    })?;
                chunk.mode = DeliveryMode::PlainText;
            }
            debug!(index = chunk.index, mode = ?chunk.mode, "Chunk delivered");
            delivered.push(chunk);
        }
        Ok(delivered)
    }
}
