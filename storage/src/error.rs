//! Storage error types.
//!
//! Returned by the snapshot stores and the allow-list file.

use dice_engine::SnapshotError;
use thiserror::Error;

/// Errors that can occur when loading or saving bot state.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Stored data that cannot represent valid statistics (e.g. a negative roll count).
    #[error("Corrupt data: {0}")]
    Corrupt(String),
}
