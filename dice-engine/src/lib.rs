//! # dice-engine
//!
//! Core of the dice bot, with no I/O:
//!
//! - [`notation`] – `[count]d<sides>[+|-modifier]` parsing and validation
//! - [`roll`] – evaluation with a caller-supplied RNG and result formatting
//! - [`stats`] – per-chat, per-user luck statistics and the leaderboard
//! - [`snapshot`] – versioned snapshot model for persistence
//! - [`command`] – chat command classification
//! - [`dispatcher`] – ties the above together for one incoming message

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod notation;
pub mod roll;
pub mod snapshot;
pub mod stats;

pub use command::{classify, Command};
pub use dispatcher::{Dispatcher, Reply, TextFormat, HELP_TEXT};
pub use error::DiceError;
pub use notation::{parse, RollRequest, MAX_DICE, MIN_DICE, SUPPORTED_SIDES};
pub use roll::{evaluate, format_roll, RollOutcome};
pub use snapshot::{
    ChatSnapshot, DisplayNameRecord, SnapshotError, StatsSnapshot, UserStatRecord,
    SNAPSHOT_VERSION,
};
pub use stats::{render_leaderboard, LeaderboardEntry, StatsAggregator, UserStat};
