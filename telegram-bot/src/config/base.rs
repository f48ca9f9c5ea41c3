//! Base config: Telegram Bot connection, logging, chunked delivery. Loaded from env.

use anyhow::Result;
use std::env;

use crate::delivery::{DEFAULT_CHUNK_SIZE, TELEGRAM_MESSAGE_LIMIT};

/// Default log file path when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/telegram-gemini-bot.log";

/// Base config: Telegram-related, logging, delivery only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN or TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// MESSAGE_CHUNK_SIZE: max UTF-16 code units per outbound message
    pub chunk_size: usize,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
                .ok()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        let chunk_size = match env::var("MESSAGE_CHUNK_SIZE") {
            Ok(s) => s
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("MESSAGE_CHUNK_SIZE is not a number: {}: {}", s, e))?,
            Err(_) => DEFAULT_CHUNK_SIZE,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            chunk_size,
        })
    }

    /// Validate config: telegram_api_url must be a valid URL if set; chunk_size must be in 1..4096.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.chunk_size == 0 || self.chunk_size >= TELEGRAM_MESSAGE_LIMIT {
            anyhow::bail!(
                "MESSAGE_CHUNK_SIZE must be between 1 and {}, got {}",
                TELEGRAM_MESSAGE_LIMIT - 1,
                self.chunk_size
            );
        }
        Ok(())
    }
}
