use std::sync::Arc;
use std::thread;

use gameboxd_db::{
    FavoriteRepository, LibraryStats, LoggedEntryRepository, SqliteStore,
};

use super::*;

fn engine() -> ReconciliationEngine<SqliteStore> {
    ReconciliationEngine::new(SqliteStore::open_memory().unwrap())
}

fn game(id: i64, name: &str) -> Game {
    Game {
        genres: Some(vec!["Action".to_string(), "RPG".to_string()]),
        platforms: vec![Platform {
            name: "PlayStation 5".to_string(),
            logo_url: Some("https://images.example.com/ps5.png".to_string()),
        }],
        ..Game::new(id, name)
    }
}

/// Store wrapper that can simulate stale reads and failing writes.
struct FaultyStore {
    inner: SqliteStore,
    stale_reads: bool,
    failing_ids: Vec<i64>,
    fail_clear: bool,
}

impl FaultyStore {
    fn new() -> Self {
        Self {
            inner: SqliteStore::open_memory().unwrap(),
            stale_reads: false,
            failing_ids: Vec::new(),
            fail_clear: false,
        }
    }
}

impl FavoriteRepository for FaultyStore {
    fn insert_favorite(&self, record: &FavoriteRecord) -> Result<(), StoreError> {
        self.inner.insert_favorite(record)
    }

    fn delete_favorite(&self, game_id: i64) -> Result<bool, StoreError> {
        if self.failing_ids.contains(&game_id) {
            return Err(StoreError::LockPoisoned);
        }
        self.inner.delete_favorite(game_id)
    }

    fn find_favorite(&self, game_id: i64) -> Result<Option<FavoriteRecord>, StoreError> {
        if self.stale_reads {
            return Ok(None);
        }
        self.inner.find_favorite(game_id)
    }

    fn is_favorite(&self, game_id: i64) -> Result<bool, StoreError> {
        Ok(self.find_favorite(game_id)?.is_some())
    }

    fn list_favorites(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        self.inner.list_favorites()
    }
}

impl LoggedEntryRepository for FaultyStore {
    fn insert_logged_entry(&self, entry: &NewLoggedEntry) -> Result<LoggedEntry, StoreError> {
        self.inner.insert_logged_entry(entry)
    }

    fn delete_logged_entry(&self, id: i64) -> Result<bool, StoreError> {
        if self.failing_ids.contains(&id) {
            return Err(StoreError::LockPoisoned);
        }
        self.inner.delete_logged_entry(id)
    }

    fn list_logged_entries(&self) -> Result<Vec<LoggedEntry>, StoreError> {
        self.inner.list_logged_entries()
    }

    fn logged_entries_for_game(&self, game_id: i64) -> Result<Vec<LoggedEntry>, StoreError> {
        self.inner.logged_entries_for_game(game_id)
    }
}

impl RecordStore for FaultyStore {
    fn clear_all(&self) -> Result<ClearStats, StoreError> {
        if self.fail_clear {
            return Err(StoreError::LockPoisoned);
        }
        self.inner.clear_all()
    }

    fn stats(&self) -> Result<LibraryStats, StoreError> {
        self.inner.stats()
    }
}

// ── Favorites ───────────────────────────────────────────────────────────────

#[test]
fn test_favorite_then_unfavorite() {
    let engine = engine();
    let a = Game::new(1, "A");

    assert_eq!(engine.toggle_favorite(&a).unwrap(), FavoriteState::Favorited);
    let favorites = engine.list_favorites().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].game_id, 1);

    assert_eq!(
        engine.toggle_favorite(&a).unwrap(),
        FavoriteState::NotFavorited
    );
    assert!(engine.list_favorites().unwrap().is_empty());
}

#[test]
fn test_toggle_pairs_restore_state() {
    let engine = engine();
    let favorited = game(1, "Elden Ring");
    let untouched = game(2, "Celeste");
    engine.toggle_favorite(&favorited).unwrap();

    for g in [&favorited, &untouched] {
        let before = engine.is_favorite(g.id).unwrap();
        let first = engine.toggle_favorite(g).unwrap();
        assert_eq!(first.is_favorited(), !before);
        engine.toggle_favorite(g).unwrap();
        assert_eq!(engine.is_favorite(g.id).unwrap(), before);
    }
}

#[test]
fn test_favorite_snapshots_game_fields() {
    let engine = engine();
    let g = game(7, "Hades");
    engine.toggle_favorite(&g).unwrap();

    let record = engine.store().find_favorite(7).unwrap().unwrap();
    assert_eq!(record.name, "Hades");
    assert_eq!(record.cover, DEFAULT_COVER_URL);
    assert_eq!(record.genres, vec!["Action", "RPG"]);
    assert_eq!(record.platforms, g.platforms);
    assert!(chrono::DateTime::parse_from_rfc3339(&record.favorited_at).is_ok());
}

#[test]
fn test_repeated_toggles_keep_at_most_one_record() {
    let engine = engine();
    let g = game(3, "Tunic");
    for i in 0..7 {
        engine.toggle_favorite(&g).unwrap();
        let count = engine
            .list_favorites()
            .unwrap()
            .iter()
            .filter(|f| f.game_id == 3)
            .count();
        assert_eq!(count, if i % 2 == 0 { 1 } else { 0 });
    }
}

#[test]
fn test_stale_read_toggle_absorbs_duplicate() {
    let mut store = FaultyStore::new();
    store.stale_reads = true;
    let engine = ReconciliationEngine::new(store);
    let g = game(5, "Outer Wilds");

    // Another writer favorites the game after our (stale) lookup
    engine
        .store()
        .inner
        .insert_favorite(&FavoriteRecord::from_game(&g, "earlier"))
        .unwrap();

    assert_eq!(
        engine.toggle_favorite(&g).unwrap(),
        FavoriteState::NotFavorited
    );
    assert!(engine.list_favorites().unwrap().is_empty());
}

#[test]
fn test_concurrent_toggles_never_duplicate() {
    let engine = Arc::new(engine());
    let g = game(9, "Balatro");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let g = g.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    engine.toggle_favorite(&g).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(engine.list_favorites().unwrap().len() <= 1);
}

#[test]
fn test_delete_favorites_report() {
    let engine = engine();
    engine.toggle_favorite(&game(1, "A")).unwrap();
    engine.toggle_favorite(&game(2, "B")).unwrap();

    let report = engine.delete_favorites(&[1, 3, 2]);
    assert_eq!(report.deleted, vec![1, 2]);
    assert_eq!(report.missing, vec![3]);
    assert!(report.is_success());
    assert_eq!(report.attempted(), 3);
    assert!(engine.list_favorites().unwrap().is_empty());
}

#[test]
fn test_delete_favorites_partial_failure() {
    let mut store = FaultyStore::new();
    store.failing_ids = vec![2];
    let engine = ReconciliationEngine::new(store);
    engine.toggle_favorite(&game(1, "A")).unwrap();
    engine.toggle_favorite(&game(2, "B")).unwrap();

    let report = engine.delete_favorites(&[1, 2]);
    assert_eq!(report.deleted, vec![1]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, 2);
    assert!(!report.is_success());
    assert!(engine.is_favorite(2).unwrap());
}

// ── Logged Entries ──────────────────────────────────────────────────────────

#[test]
fn test_log_valid_ratings() {
    let engine = engine();
    let g = game(1, "A");
    for rating in 0..=5 {
        engine.log_entry(&g, rating, "").unwrap();
    }

    let ratings: Vec<u8> = engine
        .list_logged_entries()
        .unwrap()
        .iter()
        .map(|e| e.rating.value())
        .collect();
    assert_eq!(ratings, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_log_invalid_rating_persists_nothing() {
    let engine = engine();
    let g = game(1, "A");
    for rating in [-1, 6, i64::MAX] {
        let err = engine.log_entry(&g, rating, "nope").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRating(r) if r == rating));
    }
    assert!(engine.list_logged_entries().unwrap().is_empty());
}

#[test]
fn test_double_log_creates_distinct_entries() {
    let engine = engine();
    let a = Game::new(1, "A");
    let first = engine.log_entry(&a, 4, "Great").unwrap();
    let second = engine.log_entry(&a, 4, "Great").unwrap();

    let entries = engine.list_logged_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_ne!(first.id, second.id);
    assert!(entries.iter().all(|e| e.game_id == Some(1)));
    assert!(entries.iter().all(|e| e.feedback == "Great"));
}

#[test]
fn test_log_copies_game_fields() {
    let engine = engine();
    let mut g = game(4, "Hollow Knight");
    g.cover = Some("https://images.example.com/hk.jpg".to_string());

    let entry = engine.log_entry(&g, 5, "").unwrap();
    assert_eq!(entry.name, "Hollow Knight");
    assert_eq!(entry.cover, "https://images.example.com/hk.jpg");
    assert_eq!(entry.genres, vec!["Action", "RPG"]);
    assert_eq!(entry.game_id, Some(4));
}

#[test]
fn test_logging_does_not_touch_favorites() {
    let engine = engine();
    let g = game(1, "A");
    engine.log_entry(&g, 3, "").unwrap();
    assert!(!engine.is_favorite(1).unwrap());

    engine.toggle_favorite(&g).unwrap();
    engine.toggle_favorite(&g).unwrap();
    assert_eq!(engine.logged_entries_for_game(1).unwrap().len(), 1);
}

#[test]
fn test_delete_logged_entries_report() {
    let engine = engine();
    let g = game(1, "A");
    let kept = engine.log_entry(&g, 2, "").unwrap();
    let gone = engine.log_entry(&g, 3, "").unwrap();

    let report = engine.delete_logged_entries(&[gone.id, 999]);
    assert_eq!(report.deleted, vec![gone.id]);
    assert_eq!(report.missing, vec![999]);
    assert_eq!(engine.list_logged_entries().unwrap(), vec![kept]);
}

// ── Library ─────────────────────────────────────────────────────────────────

#[test]
fn test_reset_all_clears_both_collections() {
    let engine = engine();
    engine.toggle_favorite(&game(1, "A")).unwrap();
    engine.toggle_favorite(&game(2, "B")).unwrap();
    engine.log_entry(&game(1, "A"), 4, "Great").unwrap();

    let cleared = engine.reset_all().unwrap();
    assert_eq!(cleared.favorites, 2);
    assert_eq!(cleared.logged_entries, 1);
    assert!(engine.list_favorites().unwrap().is_empty());
    assert!(engine.list_logged_entries().unwrap().is_empty());
}

#[test]
fn test_reset_all_failure_keeps_records() {
    let mut store = FaultyStore::new();
    store.fail_clear = true;
    let engine = ReconciliationEngine::new(store);
    engine.toggle_favorite(&game(1, "A")).unwrap();
    engine.log_entry(&game(1, "A"), 4, "").unwrap();

    assert!(matches!(
        engine.reset_all(),
        Err(EngineError::Store(StoreError::LockPoisoned))
    ));
    assert_eq!(engine.list_favorites().unwrap().len(), 1);
    assert_eq!(engine.list_logged_entries().unwrap().len(), 1);
}

#[test]
fn test_stats() {
    let engine = engine();
    engine.toggle_favorite(&game(1, "A")).unwrap();
    engine.log_entry(&game(1, "A"), 5, "").unwrap();
    engine.log_entry(&game(2, "B"), 2, "").unwrap();

    let stats = engine.stats().unwrap();
    assert_eq!(stats.favorites, 1);
    assert_eq!(stats.logged_entries, 2);
    assert_eq!(stats.logged_games, 2);
    assert_eq!(stats.average_rating, Some(3.5));
}
