use std::fs;

use chrono::NaiveDateTime;
use tempfile::{tempdir, TempDir};

use diary_core::credentials::hash_password;
use diary_core::entry::TIMESTAMP_FORMAT;
use diary_core::{AccountStore, DiaryError, Entry, FlatFileStore};

fn temp_store() -> (TempDir, FlatFileStore) {
    let dir = tempdir().expect("tempdir");
    let store = FlatFileStore::new(dir.path());
    (dir, store)
}

fn entry(when: &str, text: &str) -> Entry {
    let ts = NaiveDateTime::parse_from_str(when, TIMESTAMP_FORMAT).expect("timestamp");
    Entry::new(ts, text).expect("entry")
}

#[test]
fn test_create_then_load_empty_record() {
    let (_dir, store) = temp_store();
    let hash = hash_password("secret123");

    store.create("alice", &hash).expect("create should succeed");
    assert!(store.exists("alice"));

    let record = store.load("alice").expect("load should succeed");
    assert_eq!(record.password_hash, hash);
    assert!(record.entries.is_empty());
}

#[test]
fn test_create_duplicate_fails() {
    let (_dir, store) = temp_store();
    let hash = hash_password("secret123");

    store.create("alice", &hash).expect("first create");
    let result = store.create("alice", &hash);
    assert!(matches!(result, Err(DiaryError::DuplicateAccount(_))));
}

#[test]
fn test_load_missing_account_fails() {
    let (_dir, store) = temp_store();
    let result = store.load("nobody");
    assert!(matches!(result, Err(DiaryError::AccountNotFound(_))));
    assert!(!store.exists("nobody"));
}

#[test]
fn test_persist_load_round_trip() {
    let (_dir, store) = temp_store();
    let hash = hash_password("secret123");
    let entries = vec![
        entry("2024-03-01 09:15:00", "first note"),
        entry("2024-03-02 18:00:30", "second note\nspanning two lines"),
        entry("2024-03-03 07:45:12", "third"),
    ];

    store.persist("alice", &hash, &entries).expect("persist");
    let record = store.load("alice").expect("load");

    assert_eq!(record.password_hash, hash);
    assert_eq!(record.entries, entries);
}

#[test]
fn test_persist_replaces_prior_content() {
    let (_dir, store) = temp_store();
    let hash = hash_password("secret123");

    store
        .persist("alice", &hash, &[entry("2024-03-01 09:15:00", "old")])
        .expect("first persist");
    let entries = vec![
        entry("2024-03-01 09:15:00", "old"),
        entry("2024-03-02 09:15:00", "new"),
    ];
    store.persist("alice", &hash, &entries).expect("second persist");

    let record = store.load("alice").expect("load");
    assert_eq!(record.entries, entries);
}

#[test]
fn test_text_with_blank_lines_round_trips() {
    let (_dir, store) = temp_store();
    let hash = hash_password("secret123");
    let entries = vec![entry(
        "2024-03-01 09:15:00",
        "first paragraph\n\nsecond paragraph",
    )];

    store.persist("alice", &hash, &entries).expect("persist");
    let record = store.load("alice").expect("load");
    assert_eq!(record.entries, entries);
}

#[test]
fn test_file_layout_matches_contract() {
    let (dir, store) = temp_store();
    let hash = hash_password("secret123");
    let entries = vec![entry("2024-03-01 09:15:00", "a note")];

    store.persist("alice", &hash, &entries).expect("persist");

    let path = dir.path().join("alice_diary.txt");
    let contents = fs::read_to_string(&path).expect("read record");
    assert_eq!(
        contents,
        format!("{}\n[2024-03-01 09:15:00]\na note\n\n", hash)
    );
}

#[test]
fn test_load_corrupt_record_fails() {
    let (dir, store) = temp_store();
    let path = dir.path().join("mallory_diary.txt");
    fs::write(&path, "this is not a hash line\nsome text\n").expect("write");

    let result = store.load("mallory");
    assert!(matches!(result, Err(DiaryError::Storage(_))));
}

#[test]
fn test_username_cannot_escape_data_dir() {
    let (_dir, store) = temp_store();
    let hash = hash_password("secret123");

    assert!(store.create("../outside", &hash).is_err());
    assert!(store.create("a/b", &hash).is_err());
    assert!(matches!(
        store.create("", &hash),
        Err(DiaryError::MissingInput(_))
    ));
}

#[cfg(unix)]
#[test]
fn test_record_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, store) = temp_store();
    store
        .create("alice", &hash_password("secret123"))
        .expect("create");

    let path = dir.path().join("alice_diary.txt");
    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
