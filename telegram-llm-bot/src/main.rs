//! telegram-llm-bot: entry point. Loads `.env`, parses the CLI and runs the bot or lists models.

use anyhow::Result;
use clap::Parser;
use telegram_llm_bot::{list_models, load_config, load_llm_config, run_bot_with_llm, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, model } => {
            let config = load_config(token)?;
            let llm_cfg = load_llm_config(model)?;
            run_bot_with_llm(config, llm_cfg).await
        }
        Commands::ListModels => {
            let llm_cfg = load_llm_config(None)?;
            let models = list_models(&llm_cfg).await?;
            println!("{}", serde_json::to_string_pretty(&models)?);
            Ok(())
        }
    }
}
