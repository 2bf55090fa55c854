use gameboxd_catalog::types::*;
use gameboxd_db::*;

fn favorite(game_id: i64, name: &str) -> FavoriteRecord {
    FavoriteRecord {
        game_id,
        name: name.to_string(),
        cover: "cover".to_string(),
        release_date: None,
        summary: Some("summary".to_string()),
        genres: vec![],
        platforms: vec![],
        favorited_at: "2025-03-05T12:00:00+00:00".to_string(),
    }
}

fn entry(game_id: Option<i64>, rating: i64) -> NewLoggedEntry {
    NewLoggedEntry {
        name: "Game".to_string(),
        cover: "cover".to_string(),
        rating: Rating::new(rating).unwrap(),
        feedback: String::new(),
        genres: vec!["Puzzle".to_string()],
        game_id,
        logged_at: "2025-03-05T12:00:00+00:00".to_string(),
    }
}

#[test]
fn favorites_listed_in_insertion_order() {
    let conn = open_memory().unwrap();
    insert_favorite(&conn, &favorite(30, "C")).unwrap();
    insert_favorite(&conn, &favorite(10, "A")).unwrap();
    insert_favorite(&conn, &favorite(20, "B")).unwrap();

    let ids: Vec<i64> = list_favorites(&conn)
        .unwrap()
        .iter()
        .map(|f| f.game_id)
        .collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn history_for_game_filters_by_reference() {
    let conn = open_memory().unwrap();
    insert_logged_entry(&conn, &entry(Some(1), 4)).unwrap();
    insert_logged_entry(&conn, &entry(Some(2), 2)).unwrap();
    insert_logged_entry(&conn, &entry(Some(1), 5)).unwrap();
    insert_logged_entry(&conn, &entry(None, 1)).unwrap();

    let history = logged_entries_for_game(&conn, 1).unwrap();
    let ratings: Vec<u8> = history.iter().map(|e| e.rating.value()).collect();
    assert_eq!(ratings, vec![4, 5]);
}

#[test]
fn stats_on_empty_library() {
    let conn = open_memory().unwrap();
    let stats = library_stats(&conn).unwrap();
    assert_eq!(stats.favorites, 0);
    assert_eq!(stats.logged_entries, 0);
    assert_eq!(stats.logged_games, 0);
    assert_eq!(stats.average_rating, None);
}

#[test]
fn stats_count_distinct_games() {
    let conn = open_memory().unwrap();
    insert_favorite(&conn, &favorite(1, "A")).unwrap();
    insert_logged_entry(&conn, &entry(Some(1), 4)).unwrap();
    insert_logged_entry(&conn, &entry(Some(1), 2)).unwrap();
    insert_logged_entry(&conn, &entry(Some(2), 3)).unwrap();

    let stats = library_stats(&conn).unwrap();
    assert_eq!(stats.favorites, 1);
    assert_eq!(stats.logged_entries, 3);
    assert_eq!(stats.logged_games, 2);
    assert_eq!(stats.average_rating, Some(3.0));
}

#[test]
fn corrupt_blob_reads_as_empty_but_is_reported() {
    let conn = open_memory().unwrap();
    let mut record = favorite(1, "A");
    record.genres = vec!["Shooter".to_string()];
    insert_favorite(&conn, &record).unwrap();
    conn.execute(
        "UPDATE favorites SET genres_json = '[\"Shoot' WHERE game_id = 1",
        [],
    )
    .unwrap();

    let found = find_favorite(&conn, 1).unwrap().unwrap();
    assert!(found.genres.is_empty());

    let issues = find_corrupt_blobs(&conn).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].table, "favorites");
    assert_eq!(issues[0].column, "genres_json");
}

#[test]
fn null_blob_is_not_corrupt() {
    let conn = open_memory().unwrap();
    insert_logged_entry(&conn, &entry(Some(1), 4)).unwrap();
    conn.execute("UPDATE logged_entries SET genres_json = NULL", [])
        .unwrap();

    assert!(list_logged_entries(&conn).unwrap()[0].genres.is_empty());
    assert!(find_corrupt_blobs(&conn).unwrap().is_empty());
}
