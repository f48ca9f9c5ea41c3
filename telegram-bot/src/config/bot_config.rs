//! BotConfig: BaseConfig plus getters. Use load() for env-based loading.
//!
//! Only provides base config (Telegram + log + delivery). Gemini config lives in llm-client.

use anyhow::Result;

use super::BaseConfig;

/// Bot config. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
}

impl BotConfig {
    /// Load config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn chunk_size(&self) -> usize {
        self.base.chunk_size
    }
}
