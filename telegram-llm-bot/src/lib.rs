//! # telegram_llm_bot
//!
//! Telegram ⇄ Gemini relay. **Public API:** see [facade] (`run_bot_with_llm`, `list_models`,
//! `build_chain_with_provider`, `build_chain_with_generator`) and [cli].

mod assembly;
pub mod cli;
mod facade;
pub mod handlers;

pub use cli::{load_config, load_llm_config, Cli, Commands};
pub use facade::*;
pub use handlers::{CommandHandler, GeminiHandler};
