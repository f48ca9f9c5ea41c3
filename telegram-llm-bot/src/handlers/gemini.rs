//! Gemini relay: forwards a chat message to the model and delivers the reply in ordered chunks.

use async_trait::async_trait;
use llm_client::FallbackGenerator;
use telegram_bot::{
    truncate_text, DbotError, Dispatcher, Handler, HandlerResponse, Message, RenderMode, Result,
};
use tracing::{debug, error, info, instrument, warn};

/// Sent when the model returns no text.
pub const MSG_EMPTY_RESPONSE: &str = "Sorry, there was no response. Please try again.";
/// Appended to generation errors shown in the chat.
pub const MSG_SWITCH_MODEL_HINT: &str = "Try /model_flash or /model_pro to switch models.";
/// Longest error detail shown in the chat, in UTF-16 code units; keeps the notice under Telegram's limit.
pub const MAX_ERROR_DETAIL_UNITS: usize = 1000;

/// Relays text messages to Gemini through [`FallbackGenerator`] and replies via [`Dispatcher`].
#[derive(Clone)]
pub struct GeminiHandler {
    generator: FallbackGenerator,
    dispatcher: Dispatcher,
}

impl GeminiHandler {
    pub fn new(generator: FallbackGenerator, dispatcher: Dispatcher) -> Self {
        Self {
            generator,
            dispatcher,
        }
    }

    async fn send_error(&self, message: &Message, text: &str) {
        if let Err(e) = self
            .dispatcher
            .bot()
            .send_message(&message.chat, text, RenderMode::Plain)
            .await
        {
            error!(error = %e, "Failed to send error message");
        }
    }
}

#[async_trait]
impl Handler for GeminiHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let question = message.text();
        if question.is_empty() || message.is_command() {
            debug!("step: GeminiHandler skip (empty or command)");
            return Ok(HandlerResponse::Ignore);
        }

        if let Err(e) = self.dispatcher.bot().send_typing(&message.chat).await {
            debug!(error = %e, "Typing indicator failed, ignored");
        }

        let generation = match self.generator.generate(&[question.to_string()]).await {
            Ok(generation) => generation,
            Err(e) => {
                error!(error = %e, "Generation failed");
                let detail = truncate_text(&e.to_string(), MAX_ERROR_DETAIL_UNITS);
                let text = format!("❌ {}\n\n{}", detail, MSG_SWITCH_MODEL_HINT);
                self.send_error(message, &text).await;
                return Ok(HandlerResponse::Stop);
            }
        };

        let reply = if generation.text.trim().is_empty() {
            warn!(model = %generation.model, "Model returned empty text");
            MSG_EMPTY_RESPONSE.to_string()
        } else {
            generation.text
        };

        let delivered = self
            .dispatcher
            .deliver(&message.chat, &reply)
            .await
            .map_err(|e| {
                error!(chunk_index = e.index, error = %e, "Reply delivery failed");
                DbotError::Delivery(e)
            })?;
        info!(
            model = %generation.model,
            chunks = delivered.len(),
            reply_len = reply.chars().count(),
            "Reply delivered"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}
