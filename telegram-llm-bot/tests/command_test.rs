//! Integration tests for operator commands driven through the bot's handler chain.

use std::sync::Arc;

use telegram_bot::{HandlerResponse, RenderMode};
use telegram_llm_bot::build_chain_with_provider;

use fakes::{test_config, text_message, RecordingBot, ScriptedProvider};

fn both_models() -> ScriptedProvider {
    ScriptedProvider::advertising(&["models/gemini-1.5-flash", "models/gemini-1.5-pro"])
        .reply("gemini-1.5-flash", Ok("flash says hi"))
        .reply("gemini-1.5-pro", Ok("pro says hi"))
}

/// **Test: /start replies in plain text with the current preference and command help.**
#[tokio::test]
async fn test_start_shows_status_and_help() {
    let bot = Arc::new(RecordingBot::default());
    let (chain, _generator) = build_chain_with_provider(
        &test_config(3800),
        Arc::new(both_models()),
        "gemini-1.5-flash",
        bot.clone(),
    )
    .unwrap();

    let response = chain.handle(&text_message("/start")).await.unwrap();

    let sends = bot.sends();
    assert_eq!(sends.len(), 1);
    let (text, mode) = &sends[0];
    assert_eq!(*mode, RenderMode::Plain);
    assert!(text.contains("Current model: gemini-1.5-flash"));
    assert!(text.contains("/model_flash"));
    assert!(text.contains("/model_pro"));
    assert_eq!(response, HandlerResponse::Reply(text.clone()));
}

/// **Test: /model_pro switches the preference and the next question uses the pro model.**
#[tokio::test]
async fn test_model_pro_switches_preference_and_reresolves() {
    let provider = Arc::new(both_models());
    let bot = Arc::new(RecordingBot::default());
    let (chain, generator) = build_chain_with_provider(
        &test_config(3800),
        provider.clone(),
        "gemini-1.5-flash",
        bot.clone(),
    )
    .unwrap();

    chain.handle(&text_message("first")).await.unwrap();
    chain.handle(&text_message("/model_pro")).await.unwrap();
    assert_eq!(generator.model_state().preference().await, "gemini-1.5-pro");
    assert!(generator.model_state().resolved().await.is_none());
    chain.handle(&text_message("second")).await.unwrap();

    assert_eq!(
        bot.texts(),
        vec![
            "flash says hi".to_string(),
            "Model set to gemini-1.5-pro ✅\nStart sending your messages.".to_string(),
            "pro says hi".to_string(),
        ]
    );
    assert_eq!(
        provider.called_models(),
        vec!["gemini-1.5-flash", "gemini-1.5-pro"]
    );
}

/// **Test: commands addressed to the bot by name are recognised.**
#[tokio::test]
async fn test_model_flash_with_bot_suffix() {
    let bot = Arc::new(RecordingBot::default());
    let (chain, generator) = build_chain_with_provider(
        &test_config(3800),
        Arc::new(both_models()),
        "gemini-1.5-pro",
        bot.clone(),
    )
    .unwrap();

    chain
        .handle(&text_message("/model_flash@GeminiRelayBot"))
        .await
        .unwrap();

    assert_eq!(generator.model_state().preference().await, "gemini-1.5-flash");
}

/// **Test: /models lists generation-capable models by bare id.**
#[tokio::test]
async fn test_models_lists_available_models() {
    let bot = Arc::new(RecordingBot::default());
    let (chain, _generator) = build_chain_with_provider(
        &test_config(3800),
        Arc::new(both_models()),
        "gemini-1.5-flash",
        bot.clone(),
    )
    .unwrap();

    chain.handle(&text_message("/models")).await.unwrap();

    assert_eq!(
        bot.texts(),
        vec!["Available models:\ngemini-1.5-flash\ngemini-1.5-pro"]
    );
}

/// **Test: /models reports a listing failure instead of failing the chain.**
#[tokio::test]
async fn test_models_reports_listing_failure() {
    let bot = Arc::new(RecordingBot::default());
    let (chain, _generator) = build_chain_with_provider(
        &test_config(3800),
        Arc::new(ScriptedProvider::unreachable_listing()),
        "gemini-1.5-flash",
        bot.clone(),
    )
    .unwrap();

    chain.handle(&text_message("/models")).await.unwrap();

    assert_eq!(
        bot.texts(),
        vec!["❌ Could not list models: connection refused"]
    );
}

/// **Test: unknown commands stop the chain silently and never reach the model.**
#[tokio::test]
async fn test_unknown_command_is_swallowed() {
    let provider = Arc::new(both_models());
    let bot = Arc::new(RecordingBot::default());
    let (chain, _generator) = build_chain_with_provider(
        &test_config(3800),
        provider.clone(),
        "gemini-1.5-flash",
        bot.clone(),
    )
    .unwrap();

    let response = chain.handle(&text_message("/help")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.sends().is_empty());
    assert!(provider.called_models().is_empty());
}
