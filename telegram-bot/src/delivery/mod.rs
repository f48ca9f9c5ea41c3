//! Outbound delivery: splits long replies to fit Telegram's message limit and sends the pieces in order.

mod chunker;
mod dispatcher;

pub use chunker::{
    chunk_text, truncate_text, utf16_len, DEFAULT_CHUNK_SIZE, TELEGRAM_MESSAGE_LIMIT,
};
pub use dispatcher::{DeliveryMode, Dispatcher, OutboundChunk};
