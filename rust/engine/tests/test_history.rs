use std::fs;

use sixmax_engine::history::{HandStore, HistoryError, JsonlStore, MemoryStore};
use sixmax_engine::logger::HandRecord;

fn record(id: &str, created_at: &str) -> HandRecord {
    HandRecord {
        id: id.to_string(),
        stack_size: 10_000,
        dealer_position: 0,
        small_blind_position: 1,
        big_blind_position: 2,
        player_hands: "Player 1: AhKh".to_string(),
        action_sequence: "f.f.f.f.f".to_string(),
        winnings: "Player 3: +20".to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn jsonl_store_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/hands.jsonl");
    let store = JsonlStore::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn jsonl_store_appends_one_line_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut store = JsonlStore::open(&path).unwrap();
    let stored = store.create(record("h1", "2030-01-01T00:00:00Z")).unwrap();
    assert_eq!(stored.id, "h1");
    store.create(record("h2", "2030-01-01T00:00:05Z")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.ends_with('\n'));
    assert!(!content.contains('\r'));
    assert!(content.lines().all(|l| l.contains("\"actionSequence\"")));
}

#[test]
fn jsonl_store_lists_newest_first_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    {
        let mut store = JsonlStore::open(&path).unwrap();
        store.create(record("old", "2030-01-01T00:00:00Z")).unwrap();
        store.create(record("new", "2030-01-02T00:00:00Z")).unwrap();
    }
    let mut store = JsonlStore::open(&path).unwrap();
    store.create(record("mid", "2030-01-01T12:00:00Z")).unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn jsonl_store_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonlStore::open(dir.path().join("hands.jsonl")).unwrap();
    store.create(record("dup", "2030-01-01T00:00:00Z")).unwrap();
    let err = store.create(record("dup", "2030-01-02T00:00:00Z")).unwrap_err();
    assert!(matches!(err, HistoryError::DuplicateId(ref id) if id == "dup"));
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn malformed_line_reports_its_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut store = JsonlStore::open(&path).unwrap();
    store.create(record("ok", "2030-01-01T00:00:00Z")).unwrap();
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("{not json}\n");
    fs::write(&path, content).unwrap();

    match store.list() {
        Err(HistoryError::Malformed { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected malformed error, got {other:?}"),
    }
}

#[test]
fn memory_store_behaves_like_the_file_store() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    store.create(record("a", "2030-01-01T00:00:00Z")).unwrap();
    store.create(record("b", "2030-01-03T00:00:00Z")).unwrap();
    store.create(record("c", "2030-01-02T00:00:00Z")).unwrap();
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
    assert!(store.create(record("a", "2030-01-04T00:00:00Z")).is_err());
}
