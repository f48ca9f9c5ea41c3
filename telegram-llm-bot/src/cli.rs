//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use llm_client::EnvLlmConfig;
use telegram_bot::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "telegram-llm-bot")]
#[command(about = "Telegram bot that answers with Google Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; flags override BOT_TOKEN and GEMINI_MODEL).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Print the models visible to GOOGLE_API_KEY as JSON and exit.
    ListModels,
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Load Gemini config from environment. If `model` is provided it overrides GEMINI_MODEL.
pub fn load_llm_config(model: Option<String>) -> Result<EnvLlmConfig> {
    Ok(EnvLlmConfig::from_env()?.with_model(model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "telegram-llm-bot",
            "run",
            "--token",
            "123:abc",
            "--model",
            "gemini-1.5-pro",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("123:abc".to_string()),
                model: Some("gemini-1.5-pro".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_list_models() {
        let cli = Cli::try_parse_from(["telegram-llm-bot", "list-models"]).unwrap();
        assert_eq!(cli.command, Commands::ListModels);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["telegram-llm-bot"]).is_err());
    }
}
