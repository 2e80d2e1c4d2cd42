//! Integration tests for the on-disk history document
//!
//! Verifies the exact file layout shared by the album catalog and the
//! track play history.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tempfile::TempDir;
use tonearm_storage::HistoryStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Album {
    uid: String,
    name: String,
}

fn album(uid: &str, name: &str) -> Album {
    Album {
        uid: uid.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn file_layout_matches_history_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("album_history.json");

    let mut store = HistoryStore::open(&path, "uid");
    store.upsert(
        "abc",
        album("abc", "A"),
        Utc.timestamp_opt(1_718_000_000, 0).unwrap(),
    );
    store.persist().unwrap();

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw,
        json!({
            "history": [
                {"uid": "abc", "data": {"uid": "abc", "name": "A"}, "timestamp": 1_718_000_000}
            ]
        })
    );
}

#[test]
fn reload_preserves_entries_and_second_precision_timestamps() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("album_history.json");

    let mut store = HistoryStore::open(&path, "uid");
    store.upsert("a", album("a", "First"), Utc.timestamp_opt(100, 0).unwrap());
    store.upsert("b", album("b", "Second"), Utc.timestamp_opt(200, 0).unwrap());
    store.persist().unwrap();

    let reloaded: HistoryStore<Album> = HistoryStore::load(&path, "uid").unwrap();
    let order: Vec<&str> = reloaded
        .history()
        .by_recency()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(order, vec!["b", "a"]);
    assert_eq!(reloaded.history().get("a").unwrap().value.name, "First");
}

#[test]
fn repeated_upserts_keep_one_row_per_key() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("album_history.json");

    let mut store = HistoryStore::open(&path, "uid");
    for (secs, name) in [(1, "v1"), (2, "v2"), (3, "v3")] {
        store.upsert("same", album("same", name), Utc.timestamp_opt(secs, 0).unwrap());
        store.persist().unwrap();
    }

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let rows = raw["history"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["data"]["name"], "v3");
    assert_eq!(rows[0]["timestamp"], 3);
}

#[test]
fn failed_persist_keeps_memory_state() {
    let temp = TempDir::new().unwrap();
    // A directory where the file should be makes the rename fail
    let path = temp.path().join("blocked");
    std::fs::create_dir_all(path.join("child")).unwrap();

    let mut store = HistoryStore::open(&path, "uid");
    store.upsert("a", album("a", "A"), Utc::now());

    assert!(store.persist().is_err());
    assert_eq!(store.history().len(), 1);
}
