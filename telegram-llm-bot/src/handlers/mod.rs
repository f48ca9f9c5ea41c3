//! Chat handlers: operator commands and the Gemini relay.
//!
//! [`CommandHandler`] answers `/start`, `/model_flash`, `/model_pro` and `/models`.
//! [`GeminiHandler`] forwards every other text message to the model and delivers the reply in chunks.

mod command;
mod gemini;

pub use command::{
    parse_command, BotCommandKind, CommandHandler, BOT_COMMANDS, FLASH_MODEL, PRO_MODEL,
};
pub use gemini::{
    GeminiHandler, MAX_ERROR_DETAIL_UNITS, MSG_EMPTY_RESPONSE, MSG_SWITCH_MODEL_HINT,
};
