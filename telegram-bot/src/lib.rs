//! # Telegram bot framework
//!
//! Core (Handler, Bot, Message), chain (HandlerChain), telegram (REPL, adapters), delivery
//! (chunking and ordered sending), config from env, and the runner that wires them together.

pub mod chain;
pub mod components;
pub mod config;
pub mod core;
pub mod delivery;
pub mod runner;
pub mod telegram;

pub use core::{
    init_tracing, Bot, Chat, DbotError, DeliveryError, Handler, HandlerResponse, Message,
    MessageDirection, RenderMode, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    build_teloxide_bot, register_commands, run_repl, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper,
};

pub use config::{BaseConfig, BotConfig};
pub use delivery::{
    chunk_text, truncate_text, utf16_len, DeliveryMode, Dispatcher, OutboundChunk,
    DEFAULT_CHUNK_SIZE, TELEGRAM_MESSAGE_LIMIT,
};
pub use runner::{build_handler_chain_only, run_bot};

pub use components::{build_bot_components, build_handler_chain, BotComponents};
