mod helpers;

use helpers::{clear_env, run, set_env};
use serial_test::serial;
use sixmax_cli::config::HISTORY_ENV;
use sixmax_engine::history::{HandStore, JsonlStore};

#[test]
#[serial]
fn test_played_hands_are_recorded_and_listed() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");
    set_env(HISTORY_ENV, &path);

    let played = run(&["sixmax", "play", "--seed", "42", "--actions", "f.f.f.f.f"]);
    assert_eq!(played.code, 0, "stderr: {}", played.stderr);
    let simmed = run(&["sixmax", "sim", "--hands", "3", "--seed", "5"]);
    assert_eq!(simmed.code, 0, "stderr: {}", simmed.stderr);

    let listed = run(&["sixmax", "history"]);
    let limited = run(&["sixmax", "history", "--limit", "2"]);
    clear_env();

    assert_eq!(listed.code, 0, "stderr: {}", listed.stderr);
    let store = JsonlStore::open(&path).unwrap();
    let records = store.list().unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.iter().any(|r| r.action_sequence == "f.f.f.f.f"));
    // three lines per hand
    assert_eq!(listed.stdout.lines().count(), 12);
    assert_eq!(limited.stdout.lines().count(), 6);
    assert!(listed.stdout.contains("Player 3: +20"));
}

#[test]
#[serial]
fn test_repeated_seed_records_both_hands() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    set_env(HISTORY_ENV, &path);

    let args = ["sixmax", "play", "--seed", "42", "--actions", "f.f.f.f.f"];
    let first = run(&args);
    let second = run(&args);
    let sim_a = run(&["sixmax", "sim", "--hands", "2", "--seed", "5"]);
    let sim_b = run(&["sixmax", "sim", "--hands", "2", "--seed", "5"]);
    clear_env();

    for res in [&first, &second, &sim_a, &sim_b] {
        assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    }
    let records = JsonlStore::open(&path).unwrap().list().unwrap();
    assert_eq!(records.len(), 6);
    let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
#[serial]
fn test_recorded_sequence_replays_from_history() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    set_env(HISTORY_ENV, &path);

    let played = run(&["sixmax", "play", "--seed", "7", "--actions", "c.r200.f.f.f.f.c.x.x.x.x.x.x"]);
    assert_eq!(played.code, 0, "stderr: {}", played.stderr);
    let stored = JsonlStore::open(&path).unwrap().list().unwrap();
    let recorded = stored[0].action_sequence.clone();
    let replayed = run(&["sixmax", "play", "--seed", "7", "--actions", &recorded]);
    clear_env();

    assert_eq!(replayed.code, 0, "stderr: {}", replayed.stderr);
    let records = JsonlStore::open(&path).unwrap().list().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].action_sequence, recorded);
    assert_eq!(records[0].winnings, records[1].winnings);
}

#[test]
#[serial]
fn test_abandoned_hand_is_not_recorded() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    set_env(HISTORY_ENV, &path);

    let played = run(&["sixmax", "play", "--seed", "1", "--actions", "c.c"]);
    let listed = run(&["sixmax", "history"]);
    clear_env();

    assert_eq!(played.code, 0);
    assert_eq!(listed.code, 0);
    assert_eq!(listed.stdout, "No hands recorded.\n");
}

#[test]
#[serial]
fn test_history_without_a_path_exits_two() {
    clear_env();
    let res = run(&["sixmax", "history"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains(HISTORY_ENV));
}

#[test]
#[serial]
fn test_corrupt_history_exits_two() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    std::fs::write(&path, "{not json}\n").unwrap();
    set_env(HISTORY_ENV, &path);
    let res = run(&["sixmax", "history"]);
    clear_env();
    assert_eq!(res.code, 2);
    assert!(res.stderr.starts_with("Error: History error:"), "{}", res.stderr);
}
