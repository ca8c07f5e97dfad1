//! Versioned, encoding-neutral snapshot of all statistics.
//!
//! Plain records only (no maps keyed by integers) so any serde format can carry it. Stores in
//! `dice-storage` decide the encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version written by [`crate::StatsAggregator::snapshot`] and accepted by `restore`.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub version: u32,
    /// Number of full clears; absent in files written before clears were tracked.
    #[serde(default)]
    pub generation: u64,
    pub chats: Vec<ChatSnapshot>,
    pub display_names: Vec<DisplayNameRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSnapshot {
    pub chat_id: i64,
    pub users: Vec<UserStatRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatRecord {
    pub user_id: i64,
    pub sum: i64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNameRecord {
    pub user_id: i64,
    pub name: String,
}

impl StatsSnapshot {
    /// A current-version snapshot with no chats and no names.
    pub fn empty() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            generation: 0,
            chats: Vec::new(),
            display_names: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chats.iter().all(|c| c.users.is_empty()) && self.display_names.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
