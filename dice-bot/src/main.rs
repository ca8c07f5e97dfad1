//! dice-bot binary: run the bot or manage its files.

use anyhow::Result;
use clap::Parser;
use dice_bot::admin::{init_cli_tracing, run_chats_command, run_stats_command};
use dice_bot::{load_config, run_bot, Cli, Commands, StorageConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Chats { action } => {
            init_cli_tracing();
            let config = StorageConfig::from_env()?;
            println!("{}", run_chats_command(&config, action)?);
            Ok(())
        }
        Commands::Stats { action } => {
            init_cli_tracing();
            let config = StorageConfig::from_env()?;
            println!("{}", run_stats_command(&config, action).await?);
            Ok(())
        }
    }
}
