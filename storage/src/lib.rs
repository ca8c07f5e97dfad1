//! Storage crate: persistence for the dice bot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`snapshot_store`] – SnapshotStore trait
//! - [`json_store`] – JsonFileSnapshotStore (JSON file)
//! - [`sqlite_store`] – SqliteSnapshotStore (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`allowed_chats`] – AllowedChatsFile

mod allowed_chats;
mod error;
mod json_store;
mod snapshot_store;
mod sqlite_pool;
mod sqlite_store;


pub use allowed_chats::{AllowedChatsFile, FileStamp};
pub use error::StorageError;
pub use json_store::JsonFileSnapshotStore;
pub use snapshot_store::SnapshotStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteSnapshotStore;
