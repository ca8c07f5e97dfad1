//! Integration tests for JsonFileSnapshotStore.

use dice_engine::StatsAggregator;
use dice_storage::{JsonFileSnapshotStore, SnapshotStore, StorageError};
use tempfile::TempDir;

fn sample_stats() -> StatsAggregator {
    let mut stats = StatsAggregator::new();
    stats.record(-100, 1, 20);
    stats.record(-100, 1, 3);
    stats.record(-100, 2, 12);
    stats.record(8, 2, 4);
    stats.set_display_name(1, "@alice");
    stats
}

#[tokio::test]
async fn test_missing_file_loads_none() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileSnapshotStore::new(dir.path().join("stats.json"));

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_and_restore_leaderboards() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileSnapshotStore::new(dir.path().join("stats.json"));
    let stats = sample_stats();

    store.save(&stats.snapshot()).await.unwrap();
    let snapshot = store.load().await.unwrap().expect("snapshot saved");
    let restored = StatsAggregator::from_snapshot(snapshot).unwrap();

    assert_eq!(restored.leaderboard(-100), stats.leaderboard(-100));
    assert_eq!(restored.leaderboard(8), stats.leaderboard(8));
    assert_eq!(restored.display_name(1), Some("@alice"));
}

#[tokio::test]
async fn test_save_creates_parent_dirs_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("nested").join("stats.json");
    let store = JsonFileSnapshotStore::new(&path);

    store.save(&sample_stats().snapshot()).await.unwrap();

    assert!(path.exists());
    assert!(!path.with_file_name("stats.json.tmp").exists());
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = JsonFileSnapshotStore::new(&path);

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn test_generation_reads_stored_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileSnapshotStore::new(dir.path().join("stats.json"));
    assert_eq!(store.generation().await.unwrap(), None);

    let mut stats = sample_stats();
    stats.clear();
    store.save(&stats.snapshot()).await.unwrap();
    assert_eq!(store.generation().await.unwrap(), Some(1));
}
