//! Snapshot store backed by SQLite tables.
//!
//! Tables: `snapshot_meta` (single row holding the snapshot version and clear generation),
//! `user_stats` and
//! `display_names`. A save replaces every row inside one transaction.

use async_trait::async_trait;
use dice_engine::{ChatSnapshot, DisplayNameRecord, StatsSnapshot, UserStatRecord};
use tracing::{info, instrument};

use crate::error::StorageError;
use crate::snapshot_store::SnapshotStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteSnapshotStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteSnapshotStore {
    pub async fn new(database_path: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_path).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating statistics tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snapshot_meta (
                id INTEGER PRIMARY KEY CHECK (id = 0),
                version INTEGER NOT NULL,
                generation INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_stats (
                chat_id INTEGER NOT NULL,
                user_id INTEGER NOT NULL,
                face_sum INTEGER NOT NULL,
                roll_count INTEGER NOT NULL,
                PRIMARY KEY (chat_id, user_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS display_names (
                user_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Option<StatsSnapshot>, StorageError> {
        let pool = self.pool_manager.pool();

        let meta: Option<(i64, i64)> =
            sqlx::query_as("SELECT version, generation FROM snapshot_meta WHERE id = 0")
                .fetch_optional(pool)
                .await?;
        let Some((version, generation)) = meta else {
            return Ok(None);
        };
        let version = u32::try_from(version)
            .map_err(|_| StorageError::Corrupt(format!("snapshot version {}", version)))?;
        let generation = to_generation(generation)?;

        let rows: Vec<(i64, i64, i64, i64)> = sqlx::query_as(
            "SELECT chat_id, user_id, face_sum, roll_count FROM user_stats ORDER BY chat_id, user_id",
        )
        .fetch_all(pool)
        .await?;

        let mut chats: Vec<ChatSnapshot> = Vec::new();
        for (chat_id, user_id, sum, count) in rows {
            let count = u64::try_from(count).map_err(|_| {
                StorageError::Corrupt(format!(
                    "roll count {} for user {} in chat {}",
                    count, user_id, chat_id
                ))
            })?;
            let record = UserStatRecord {
                user_id,
                sum,
                count,
            };
            match chats.last_mut() {
                Some(chat) if chat.chat_id == chat_id => chat.users.push(record),
                _ => chats.push(ChatSnapshot {
                    chat_id,
                    users: vec![record],
                }),
            }
        }

        let names: Vec<(i64, String)> =
            sqlx::query_as("SELECT user_id, name FROM display_names ORDER BY user_id")
                .fetch_all(pool)
                .await?;

        info!(chats = chats.len(), names = names.len(), "Loaded statistics snapshot");

        Ok(Some(StatsSnapshot {
            version,
            generation,
            chats,
            display_names: names
                .into_iter()
                .map(|(user_id, name)| DisplayNameRecord { user_id, name })
                .collect(),
        }))
    }

    #[instrument(skip(self, snapshot))]
    async fn save(&self, snapshot: &StatsSnapshot) -> Result<(), StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        sqlx::query("DELETE FROM user_stats").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM display_names")
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO snapshot_meta (id, version, generation) VALUES (0, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET version = excluded.version, \
             generation = excluded.generation",
        )
        .bind(i64::from(snapshot.version))
        .bind(i64::try_from(snapshot.generation).map_err(|_| {
            StorageError::Corrupt(format!("generation {} too large", snapshot.generation))
        })?)
        .execute(&mut *tx)
        .await?;

        for chat in &snapshot.chats {
            for user in &chat.users {
                let count = i64::try_from(user.count).map_err(|_| {
                    StorageError::Corrupt(format!("roll count {} too large", user.count))
                })?;
                sqlx::query(
                    "INSERT OR REPLACE INTO user_stats (chat_id, user_id, face_sum, roll_count) \
                     VALUES (?, ?, ?, ?)",
                )
                .bind(chat.chat_id)
                .bind(user.user_id)
                .bind(user.sum)
                .bind(count)
                .execute(&mut *tx)
                .await?;
            }
        }

        for record in &snapshot.display_names {
            sqlx::query("INSERT OR REPLACE INTO display_names (user_id, name) VALUES (?, ?)")
                .bind(record.user_id)
                .bind(&record.name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn generation(&self) -> Result<Option<u64>, StorageError> {
        let meta: Option<(i64,)> =
            sqlx::query_as("SELECT generation FROM snapshot_meta WHERE id = 0")
                .fetch_optional(self.pool_manager.pool())
                .await?;
        meta.map(|(generation,)| to_generation(generation))
            .transpose()
    }
}

fn to_generation(value: i64) -> Result<u64, StorageError> {
    u64::try_from(value).map_err(|_| StorageError::Corrupt(format!("generation {}", value)))
}
