//! Operator commands. Replies are sent as plain text so model names with `_` or `-` are never
//! mangled by Markdown.

use async_trait::async_trait;
use llm_client::FallbackGenerator;
use std::sync::Arc;
use telegram_bot::{Bot, Handler, HandlerResponse, Message, RenderMode, Result};
use tracing::{error, info, instrument};

/// Model selected by `/model_flash`.
pub const FLASH_MODEL: &str = "gemini-1.5-flash";
/// Model selected by `/model_pro`.
pub const PRO_MODEL: &str = "gemini-1.5-pro";

/// Command menu published to Telegram: (command, description).
pub const BOT_COMMANDS: &[(&str, &str)] = &[
    ("start", "Show status and help"),
    ("model_flash", "Use gemini-1.5-flash (faster)"),
    ("model_pro", "Use gemini-1.5-pro (smarter, may be slower)"),
    ("models", "List models available to this bot"),
];

/// A recognised operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommandKind {
    Start,
    ModelFlash,
    ModelPro,
    Models,
}

/// Parses `/command` or `/command@BotName` (arguments ignored). `None` for non-commands and
/// unknown commands.
pub fn parse_command(text: &str) -> Option<BotCommandKind> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    match name {
        "start" => Some(BotCommandKind::Start),
        "model_flash" => Some(BotCommandKind::ModelFlash),
        "model_pro" => Some(BotCommandKind::ModelPro),
        "models" => Some(BotCommandKind::Models),
        _ => None,
    }
}

/// Handles operator commands; passes non-command text on, swallows unknown commands.
#[derive(Clone)]
pub struct CommandHandler {
    generator: FallbackGenerator,
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(generator: FallbackGenerator, bot: Arc<dyn Bot>) -> Self {
        Self { generator, bot }
    }

    async fn start_text(&self) -> String {
        let selection = self.generator.model_state().snapshot().await;
        let in_use = selection
            .resolved
            .unwrap_or_else(|| "not resolved yet".to_string());
        format!(
            "Hello! 🤖\n\
             I am an AI bot powered by Google Gemini.\n\n\
             Send me any question or topic and I will answer it.\n\
             Current model: {} (in use: {})\n\n\
             Commands:\n\
             /model_flash - use {} (faster)\n\
             /model_pro - use {} (smarter, may be slower)\n\
             /models - list available models\n",
            selection.preference, in_use, FLASH_MODEL, PRO_MODEL
        )
    }

    async fn switch_model(&self, model: &str) -> String {
        self.generator.set_preference(model).await;
        format!("Model set to {} ✅\nStart sending your messages.", model)
    }

    async fn models_text(&self) -> String {
        match self.generator.available_models().await {
            Ok(models) => {
                let names: Vec<&str> = models
                    .iter()
                    .filter(|m| m.supports_generation)
                    .map(|m| m.bare_id())
                    .collect();
                if names.is_empty() {
                    "No generation models are available for this API key.".to_string()
                } else {
                    format!("Available models:\n{}", names.join("\n"))
                }
            }
            Err(e) => format!("❌ Could not list models: {}", e),
        }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot
            .send_message(&message.chat, &text, RenderMode::Plain)
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = message.chat.id, "Failed to send command reply");
                e
            })?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Continue);
        }
        let command = match parse_command(message.text()) {
            Some(command) => command,
            None => {
                info!(text = %message.text(), "Unknown command, ignored");
                return Ok(HandlerResponse::Stop);
            }
        };
        info!(command = ?command, "Handling command");

        let text = match command {
            BotCommandKind::Start => self.start_text().await,
            BotCommandKind::ModelFlash => self.switch_model(FLASH_MODEL).await,
            BotCommandKind::ModelPro => self.switch_model(PRO_MODEL).await,
            BotCommandKind::Models => self.models_text().await,
        };
        self.reply(message, text).await
    }
}
