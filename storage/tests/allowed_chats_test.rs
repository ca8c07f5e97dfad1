//! Integration tests for AllowedChatsFile.

use std::collections::BTreeSet;

use dice_storage::AllowedChatsFile;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = AllowedChatsFile::new(dir.path().join("allowed_chats.txt"));

    assert!(file.load().unwrap().is_empty());
}

#[test]
fn test_load_skips_blank_and_invalid_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("allowed_chats.txt");
    std::fs::write(&path, "-1001234567890\n\n  42  \nnot-a-chat\n42\n").unwrap();

    let chats = AllowedChatsFile::new(&path).load().unwrap();

    assert_eq!(chats, BTreeSet::from([-1001234567890, 42]));
}

#[test]
fn test_add_and_remove() {
    let dir = TempDir::new().unwrap();
    let file = AllowedChatsFile::new(dir.path().join("allowed_chats.txt"));

    assert!(file.add(-100).unwrap());
    assert!(file.add(7).unwrap());
    assert!(!file.add(7).unwrap());
    assert_eq!(file.load().unwrap(), BTreeSet::from([-100, 7]));

    assert!(file.remove(-100).unwrap());
    assert!(!file.remove(-100).unwrap());
    assert_eq!(file.load().unwrap(), BTreeSet::from([7]));
}

#[test]
fn test_save_writes_one_id_per_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("allowed_chats.txt");
    let file = AllowedChatsFile::new(&path);

    file.save(&BTreeSet::from([3, -5])).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "-5\n3\n");
}

#[test]
fn test_stamp_changes_when_file_is_edited() {
    let dir = TempDir::new().unwrap();
    let file = AllowedChatsFile::new(dir.path().join("allowed_chats.txt"));
    assert_eq!(file.stamp(), None);

    file.add(-100).unwrap();
    let first = file.stamp().expect("file written");
    assert_eq!(file.stamp(), Some(first));

    file.add(-200).unwrap();
    assert_ne!(file.stamp(), Some(first));
}
