//! Telegram layer: teloxide adapters, [`crate::core::Bot`] implementation, REPL runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{build_teloxide_bot, register_commands, run_repl};
