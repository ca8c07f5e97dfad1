//! Per-chat luck statistics: running sum and count of individual die faces per user.
//!
//! Ranking is computed on demand; nothing derived is stored. Ties on the average are broken by
//! ascending user id.

use std::collections::BTreeMap;

use crate::snapshot::{
    ChatSnapshot, DisplayNameRecord, SnapshotError, StatsSnapshot, UserStatRecord,
    SNAPSHOT_VERSION,
};

/// Cumulative faces (modifiers excluded) and number of dice for one user in one chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStat {
    sum: i64,
    count: u64,
}

impl UserStat {
    /// Saturates instead of overflowing; restored snapshots may carry arbitrary totals.
    pub fn record(&mut self, face: u32) {
        self.sum = self.sum.saturating_add(i64::from(face));
        self.count = self.count.saturating_add(1);
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `sum / count`, or 0.0 when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub display_name: String,
    pub average: f64,
    pub count: u64,
}

/// Statistics for every chat plus the last-known display name of every user.
///
/// `generation` counts full clears. It travels with the snapshot so another process sharing
/// the store can tell that the statistics were wiped under it.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    chats: BTreeMap<i64, BTreeMap<i64, UserStat>>,
    display_names: BTreeMap<i64, String>,
    generation: u64,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one die face for `(chat_id, user_id)`, creating the entry on first use.
    pub fn record(&mut self, chat_id: i64, user_id: i64, face: u32) {
        self.chats
            .entry(chat_id)
            .or_default()
            .entry(user_id)
            .or_default()
            .record(face);
    }

    /// Overwrites the user's display name (no history is kept).
    pub fn set_display_name(&mut self, user_id: i64, name: impl Into<String>) {
        self.display_names.insert(user_id, name.into());
    }

    pub fn display_name(&self, user_id: i64) -> Option<&str> {
        self.display_names.get(&user_id).map(String::as_str)
    }

    pub fn user_stat(&self, chat_id: i64, user_id: i64) -> Option<UserStat> {
        self.chats.get(&chat_id)?.get(&user_id).copied()
    }

    /// Users with at least one recorded die in `chat_id`, best average first.
    pub fn leaderboard(&self, chat_id: i64) -> Vec<LeaderboardEntry> {
        let Some(users) = self.chats.get(&chat_id) else {
            return Vec::new();
        };

        // BTreeMap iterates by ascending user id and the sort is stable.
        let mut entries: Vec<LeaderboardEntry> = users
            .iter()
            .filter(|(_, stat)| stat.count > 0)
            .map(|(&user_id, stat)| LeaderboardEntry {
                user_id,
                display_name: self
                    .display_name(user_id)
                    .map_or_else(|| format!("User {}", user_id), str::to_string),
                average: stat.average(),
                count: stat.count,
            })
            .collect();
        entries.sort_by(|a, b| b.average.total_cmp(&a.average));
        entries
    }

    /// Drops every chat's statistics and every display name and starts a new generation.
    pub fn clear(&mut self) {
        self.chats.clear();
        self.display_names.clear();
        self.generation = self.generation.saturating_add(1);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Adopts a clear made elsewhere: when `stored` is newer than the current generation all
    /// state is dropped. Returns whether anything was cleared.
    pub fn sync_generation(&mut self, stored: u64) -> bool {
        if stored <= self.generation {
            return false;
        }
        self.chats.clear();
        self.display_names.clear();
        self.generation = stored;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.chats.values().all(BTreeMap::is_empty) && self.display_names.is_empty()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            version: SNAPSHOT_VERSION,
            generation: self.generation,
            chats: self
                .chats
                .iter()
                .map(|(&chat_id, users)| ChatSnapshot {
                    chat_id,
                    users: users
                        .iter()
                        .map(|(&user_id, stat)| UserStatRecord {
                            user_id,
                            sum: stat.sum,
                            count: stat.count,
                        })
                        .collect(),
                })
                .collect(),
            display_names: self
                .display_names
                .iter()
                .map(|(&user_id, name)| DisplayNameRecord {
                    user_id,
                    name: name.clone(),
                })
                .collect(),
        }
    }

    /// Replaces all state with `snapshot`. On error the current state is left untouched.
    pub fn restore(&mut self, snapshot: StatsSnapshot) -> Result<(), SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let mut chats: BTreeMap<i64, BTreeMap<i64, UserStat>> = BTreeMap::new();
        for chat in snapshot.chats {
            let users = chats.entry(chat.chat_id).or_default();
            for record in chat.users {
                users.insert(
                    record.user_id,
                    UserStat {
                        sum: record.sum,
                        count: record.count,
                    },
                );
            }
        }

        self.chats = chats;
        self.generation = snapshot.generation;
        self.display_names = snapshot
            .display_names
            .into_iter()
            .map(|r| (r.user_id, r.name))
            .collect();
        Ok(())
    }

    /// Builds an aggregator from a snapshot.
    pub fn from_snapshot(snapshot: StatsSnapshot) -> Result<Self, SnapshotError> {
        let mut stats = Self::new();
        stats.restore(snapshot)?;
        Ok(stats)
    }
}

/// Leaderboard text for a chat. Names are escaped for Telegram's legacy Markdown.
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut text = String::from("📊 Luck stats for this chat:\n\n");
    if entries.is_empty() {
        text.push_str("No rolls yet.");
        return text;
    }
    for entry in entries {
        text.push_str(&format!(
            "{}: avg **{:.2}** ({} rolls)\n",
            escape_markdown(&entry.display_name),
            entry.average,
            entry.count
        ));
    }
    text
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
