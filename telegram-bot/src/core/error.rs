//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`DeliveryError`] pins a failed send to a chunk.

use thiserror::Error;

/// Top-level error for the bot (transport, delivery).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

/// A chunk that could be sent neither as rich text nor as plain text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("chunk {index} not delivered: {reason}")]
pub struct DeliveryError {
    pub index: usize,
    pub reason: String,
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
