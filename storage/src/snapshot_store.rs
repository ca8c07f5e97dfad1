//! Persistence seam for the statistics snapshot.

use async_trait::async_trait;
use dice_engine::StatsSnapshot;

use crate::error::StorageError;

/// Loads and saves the whole statistics snapshot. Implementations choose the encoding.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<StatsSnapshot>, StorageError>;

    /// Replaces whatever was stored before.
    async fn save(&self, snapshot: &StatsSnapshot) -> Result<(), StorageError>;

    /// Clear generation of the stored snapshot, `None` when nothing has been saved yet.
    async fn generation(&self) -> Result<Option<u64>, StorageError> {
        Ok(self.load().await?.map(|snapshot| snapshot.generation))
    }
}
