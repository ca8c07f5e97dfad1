//! Chat allow-list file: one chat id per line.
//!
//! Blank lines and lines that are not integers are skipped when loading. A missing file is an
//! empty list.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{info, warn};

use crate::error::StorageError;

/// Modification time and size of the allow-list file, compared to notice edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

#[derive(Debug, Clone)]
pub struct AllowedChatsFile {
    path: PathBuf,
}

impl AllowedChatsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the file does not exist or cannot be inspected.
    pub fn stamp(&self) -> Option<FileStamp> {
        let metadata = std::fs::metadata(&self.path).ok()?;
        Some(FileStamp {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }

    pub fn load(&self) -> Result<BTreeSet<i64>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(e.into()),
        };

        let mut chats = BTreeSet::new();
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match line.parse::<i64>() {
                Ok(id) => {
                    chats.insert(id);
                }
                Err(_) => warn!(line, path = %self.path.display(), "Skipping invalid chat id"),
            }
        }
        Ok(chats)
    }

    pub fn save(&self, chats: &BTreeSet<i64>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content: String = chats.iter().map(|id| format!("{}\n", id)).collect();
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Returns false if the chat was already listed.
    pub fn add(&self, chat_id: i64) -> Result<bool, StorageError> {
        let mut chats = self.load()?;
        if !chats.insert(chat_id) {
            return Ok(false);
        }
        self.save(&chats)?;
        info!(chat_id, "Chat added to allow-list");
        Ok(true)
    }

    /// Returns false if the chat was not listed.
    pub fn remove(&self, chat_id: i64) -> Result<bool, StorageError> {
        let mut chats = self.load()?;
        if !chats.remove(&chat_id) {
            return Ok(false);
        }
        self.save(&chats)?;
        info!(chat_id, "Chat removed from allow-list");
        Ok(true)
    }
}
