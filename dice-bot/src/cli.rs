//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "dice-bot")]
#[command(about = "Telegram dice roller with per-chat luck statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Manage the chat allow-list file (ALLOWED_CHATS_FILE).
    Chats {
        #[command(subcommand)]
        action: ChatsAction,
    },
    /// Inspect or clear stored statistics (STATS_STORE_TYPE).
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ChatsAction {
    /// Print allowed chat ids.
    List,
    /// Allow a chat.
    Add {
        #[arg(allow_negative_numbers = true)]
        chat_id: i64,
    },
    /// Disallow a chat.
    Remove {
        #[arg(allow_negative_numbers = true)]
        chat_id: i64,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum StatsAction {
    /// Print the leaderboard of one chat.
    Show {
        #[arg(allow_negative_numbers = true)]
        chat_id: i64,
    },
    /// Delete all statistics of all chats. Cannot be undone.
    Clear {
        /// Confirm the clear.
        #[arg(long)]
        yes: bool,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_run_with_token() {
        assert_eq!(
            parse(&["dice-bot", "run", "--token", "abc"]),
            Commands::Run {
                token: Some("abc".to_string())
            }
        );
        assert_eq!(parse(&["dice-bot", "run"]), Commands::Run { token: None });
    }

    #[test]
    fn test_chats_accepts_negative_ids() {
        assert_eq!(
            parse(&["dice-bot", "chats", "add", "-1001234567890"]),
            Commands::Chats {
                action: ChatsAction::Add {
                    chat_id: -1001234567890
                }
            }
        );
        assert_eq!(
            parse(&["dice-bot", "chats", "remove", "42"]),
            Commands::Chats {
                action: ChatsAction::Remove { chat_id: 42 }
            }
        );
    }

    #[test]
    fn test_stats_commands() {
        assert_eq!(
            parse(&["dice-bot", "stats", "show", "-5"]),
            Commands::Stats {
                action: StatsAction::Show { chat_id: -5 }
            }
        );
        assert_eq!(
            parse(&["dice-bot", "stats", "clear"]),
            Commands::Stats {
                action: StatsAction::Clear { yes: false }
            }
        );
        assert_eq!(
            parse(&["dice-bot", "stats", "clear", "--yes"]),
            Commands::Stats {
                action: StatsAction::Clear { yes: true }
            }
        );
    }

    #[test]
    fn test_invalid_chat_id_rejected() {
        assert!(Cli::try_parse_from(["dice-bot", "chats", "add", "general"]).is_err());
    }
}
