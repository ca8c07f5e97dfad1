//! Admin commands run from the CLI against the configured files, without starting the bot.
//!
//! Each command returns the text to print. A running bot picks up allow-list edits and clears
//! on its next message.

use anyhow::{Context, Result};
use dice_engine::{LeaderboardEntry, StatsAggregator};
use dice_storage::AllowedChatsFile;
use tracing::info;

use crate::cli::{ChatsAction, StatsAction};
use crate::components::{create_snapshot_store, load_stats};
use crate::config::StorageConfig;

/// Logs to stderr so command output on stdout stays clean.
pub fn init_cli_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run_chats_command(config: &StorageConfig, action: ChatsAction) -> Result<String> {
    let file = AllowedChatsFile::new(&config.allowed_chats_file);
    let path = file.path().display().to_string();

    match action {
        ChatsAction::List => {
            let chats = file
                .load()
                .with_context(|| format!("Failed to read {}", path))?;
            if chats.is_empty() {
                return Ok(format!("No allowed chats ({}).", path));
            }
            let lines: Vec<String> = chats.iter().map(i64::to_string).collect();
            Ok(lines.join("\n"))
        }
        ChatsAction::Add { chat_id } => {
            if file.add(chat_id).with_context(|| format!("Failed to update {}", path))? {
                Ok(format!("Chat {} added.", chat_id))
            } else {
                Ok(format!("Chat {} is already allowed.", chat_id))
            }
        }
        ChatsAction::Remove { chat_id } => {
            if file
                .remove(chat_id)
                .with_context(|| format!("Failed to update {}", path))?
            {
                Ok(format!("Chat {} removed.", chat_id))
            } else {
                Ok(format!("Chat {} was not allowed.", chat_id))
            }
        }
    }
}

pub async fn run_stats_command(config: &StorageConfig, action: StatsAction) -> Result<String> {
    let store = create_snapshot_store(config).await?;

    match action {
        StatsAction::Show { chat_id } => {
            let snapshot = store.load().await.context("Failed to load statistics")?;
            let stats = match snapshot {
                Some(snapshot) => StatsAggregator::from_snapshot(snapshot)?,
                None => StatsAggregator::new(),
            };
            Ok(render_plain_leaderboard(chat_id, &stats.leaderboard(chat_id)))
        }
        StatsAction::Clear { yes } => {
            if !yes {
                anyhow::bail!("Refusing to clear all statistics without --yes");
            }
            let mut stats = load_stats(store.as_ref()).await;
            stats.clear();
            store
                .save(&stats.snapshot())
                .await
                .context("Failed to clear statistics")?;
            info!(
                store_type = %config.store_type,
                generation = stats.generation(),
                "Statistics cleared"
            );
            Ok("All statistics cleared.".to_string())
        }
    }
}

/// Terminal form of the leaderboard: no Markdown escapes or bold markers.
fn render_plain_leaderboard(chat_id: i64, entries: &[LeaderboardEntry]) -> String {
    let mut text = format!("Luck stats for chat {}:\n", chat_id);
    if entries.is_empty() {
        text.push_str("No rolls yet.");
        return text;
    }
    for entry in entries {
        text.push_str(&format!(
            "{}: avg {:.2} ({} rolls)\n",
            entry.display_name, entry.average, entry.count
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatsStoreType;
    use dice_storage::{JsonFileSnapshotStore, SnapshotStore};
    use tempfile::TempDir;

    fn storage_config(dir: &TempDir, store_type: StatsStoreType) -> StorageConfig {
        StorageConfig {
            store_type,
            stats_file: dir.path().join("stats.json").display().to_string(),
            database_url: dir.path().join("dice.db").display().to_string(),
            allowed_chats_file: dir.path().join("allowed_chats.txt").display().to_string(),
        }
    }

    #[test]
    fn test_chats_add_list_remove() {
        let dir = TempDir::new().unwrap();
        let config = storage_config(&dir, StatsStoreType::Json);

        let out = run_chats_command(&config, ChatsAction::List).unwrap();
        assert!(out.starts_with("No allowed chats"));

        let out = run_chats_command(&config, ChatsAction::Add { chat_id: -100 }).unwrap();
        assert_eq!(out, "Chat -100 added.");
        let out = run_chats_command(&config, ChatsAction::Add { chat_id: -100 }).unwrap();
        assert_eq!(out, "Chat -100 is already allowed.");
        run_chats_command(&config, ChatsAction::Add { chat_id: 7 }).unwrap();

        let out = run_chats_command(&config, ChatsAction::List).unwrap();
        assert_eq!(out, "-100\n7");

        let out = run_chats_command(&config, ChatsAction::Remove { chat_id: 7 }).unwrap();
        assert_eq!(out, "Chat 7 removed.");
        let out = run_chats_command(&config, ChatsAction::Remove { chat_id: 7 }).unwrap();
        assert_eq!(out, "Chat 7 was not allowed.");
    }

    #[tokio::test]
    async fn test_stats_show_reads_store() {
        let dir = TempDir::new().unwrap();
        let config = storage_config(&dir, StatsStoreType::Json);

        let mut stats = StatsAggregator::new();
        stats.record(-100, 1, 6);
        stats.record(-100, 1, 2);
        stats.record(-100, 2, 1);
        stats.set_display_name(1, "Frodo");
        stats.set_display_name(2, "@dice_lord");
        JsonFileSnapshotStore::new(&config.stats_file)
            .save(&stats.snapshot())
            .await
            .unwrap();

        let out = run_stats_command(&config, StatsAction::Show { chat_id: -100 })
            .await
            .unwrap();
        assert_eq!(
            out,
            "Luck stats for chat -100:\nFrodo: avg 4.00 (2 rolls)\n@dice_lord: avg 1.00 (1 rolls)\n"
        );
        assert!(!out.contains("**") && !out.contains('\\'));

        let out = run_stats_command(&config, StatsAction::Show { chat_id: 5 })
            .await
            .unwrap();
        assert!(out.ends_with("No rolls yet."));
    }

    #[tokio::test]
    async fn test_stats_clear_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let config = storage_config(&dir, StatsStoreType::Sqlite);

        let store = create_snapshot_store(&config).await.unwrap();
        let mut stats = StatsAggregator::new();
        stats.record(1, 1, 20);
        store.save(&stats.snapshot()).await.unwrap();

        assert!(run_stats_command(&config, StatsAction::Clear { yes: false })
            .await
            .is_err());
        assert!(!store.load().await.unwrap().unwrap().is_empty());

        run_stats_command(&config, StatsAction::Clear { yes: true })
            .await
            .unwrap();
        let cleared = store.load().await.unwrap().unwrap();
        assert!(cleared.is_empty());
        assert_eq!(cleared.generation, 1);

        run_stats_command(&config, StatsAction::Clear { yes: true })
            .await
            .unwrap();
        assert_eq!(store.generation().await.unwrap(), Some(2));
    }
}
