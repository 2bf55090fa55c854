use std::sync::Arc;
use std::thread;

use gameboxd_catalog::types::*;
use gameboxd_db::{FavoriteRepository, LoggedEntryRepository, RecordStore, SqliteStore, StoreError};
use tempfile::TempDir;

fn favorite(game_id: i64) -> FavoriteRecord {
    FavoriteRecord::from_game(&Game::new(game_id, format!("Game {game_id}")), "2025-03-05")
}

#[test]
fn writes_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.insert_favorite(&favorite(1)).unwrap();
        let entry = NewLoggedEntry::from_game(
            &Game::new(1, "Game 1"),
            Rating::new(4).unwrap(),
            "Great",
            "2025-03-05",
        );
        store.insert_logged_entry(&entry).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert!(store.is_favorite(1).unwrap());
    let entries = store.list_logged_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].feedback, "Great");
}

#[test]
fn concurrent_inserts_keep_one_favorite() {
    let store = Arc::new(SqliteStore::open_memory().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert_favorite(&favorite(7)))
        })
        .collect();

    let mut inserted = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.join().unwrap() {
            Ok(()) => inserted += 1,
            Err(StoreError::DuplicateKey { game_id: 7 }) => duplicates += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(inserted, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.list_favorites().unwrap().len(), 1);
}

#[test]
fn clear_all_through_trait() {
    let store = SqliteStore::open_memory().unwrap();
    store.insert_favorite(&favorite(1)).unwrap();
    store.insert_favorite(&favorite(2)).unwrap();

    let cleared = store.clear_all().unwrap();
    assert_eq!(cleared.favorites, 2);
    assert_eq!(store.stats().unwrap().favorites, 0);
}
