//! Bot configuration: BaseConfig (Telegram connection, logging, delivery) wrapped by BotConfig.

mod base;
mod bot_config;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
