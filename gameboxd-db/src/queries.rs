//! Read queries for the library database.
//!
//! Listing functions return rows in insertion order.

use gameboxd_catalog::codec;
use gameboxd_catalog::types::*;
use rusqlite::types::Type;
use rusqlite::{Connection, params};

use crate::operations::StoreError;

const FAVORITE_COLUMNS: &str = "game_id, name, cover, release_date, summary,
                genres_json, platforms_json, favorited_at";

const LOGGED_ENTRY_COLUMNS: &str = "id, name, cover, rating, feedback, genres_json,
                game_id, logged_at";

// ── Favorite Queries ────────────────────────────────────────────────────────

/// Find the favorite for a catalog id.
pub fn find_favorite(conn: &Connection, game_id: i64) -> Result<Option<FavoriteRecord>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE game_id = ?1"
    ))?;
    let result = stmt.query_row(params![game_id], row_to_favorite);
    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether a catalog id is currently favorited.
pub fn is_favorite(conn: &Connection, game_id: i64) -> Result<bool, StoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM favorites WHERE game_id = ?1)",
        params![game_id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// List all favorites, oldest first.
pub fn list_favorites(conn: &Connection) -> Result<Vec<FavoriteRecord>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites ORDER BY id"
    ))?;
    let rows = stmt.query_map([], row_to_favorite)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Logged Entry Queries ────────────────────────────────────────────────────

/// List every logged entry, oldest first.
pub fn list_logged_entries(conn: &Connection) -> Result<Vec<LoggedEntry>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {LOGGED_ENTRY_COLUMNS} FROM logged_entries ORDER BY id"
    ))?;
    let rows = stmt.query_map([], row_to_logged_entry)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List the log history for one catalog id, oldest first.
pub fn logged_entries_for_game(
    conn: &Connection,
    game_id: i64,
) -> Result<Vec<LoggedEntry>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {LOGGED_ENTRY_COLUMNS} FROM logged_entries WHERE game_id = ?1 ORDER BY id"
    ))?;
    let rows = stmt.query_map(params![game_id], row_to_logged_entry)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Both collections as read under one transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibrarySnapshot {
    pub favorites: Vec<FavoriteRecord>,
    pub logged_entries: Vec<LoggedEntry>,
}

/// Read both collections inside a single transaction so they agree with each other.
pub fn load_snapshot(conn: &Connection) -> Result<LibrarySnapshot, StoreError> {
    let tx = conn.unchecked_transaction()?;
    let favorites = list_favorites(&tx)?;
    let logged_entries = list_logged_entries(&tx)?;
    tx.commit()?;
    Ok(LibrarySnapshot {
        favorites,
        logged_entries,
    })
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall library statistics.
pub fn library_stats(conn: &Connection) -> Result<LibraryStats, StoreError> {
    let favorites: i64 = conn.query_row("SELECT COUNT(*) FROM favorites", [], |r| r.get(0))?;
    let (logged_entries, logged_games, average_rating): (i64, i64, Option<f64>) = conn
        .query_row(
            "SELECT COUNT(*), COUNT(DISTINCT game_id), AVG(rating) FROM logged_entries",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )?;

    Ok(LibraryStats {
        favorites,
        logged_entries,
        logged_games,
        average_rating,
    })
}

/// Summary statistics for the library.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryStats {
    pub favorites: i64,
    pub logged_entries: i64,
    /// Distinct catalog ids among logged entries (entries without one are not counted).
    pub logged_games: i64,
    pub average_rating: Option<f64>,
}

// ── Integrity ───────────────────────────────────────────────────────────────

/// A stored list column that no longer decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobIssue {
    pub table: &'static str,
    pub row_id: i64,
    pub column: &'static str,
    pub message: String,
}

/// Scan every list column and report the ones that are corrupted.
///
/// Normal reads silently treat these as empty lists; this is the only place
/// the difference is visible.
pub fn find_corrupt_blobs(conn: &Connection) -> Result<Vec<BlobIssue>, StoreError> {
    let mut issues = Vec::new();

    let mut stmt = conn.prepare("SELECT id, genres_json, platforms_json FROM favorites ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, Option<String>>(1)?,
            row.get::<_, Option<String>>(2)?,
        ))
    })?;
    for row in rows {
        let (id, genres, platforms) = row?;
        if let Err(e) = codec::try_decode_list::<String>(genres.as_deref()) {
            issues.push(blob_issue("favorites", id, "genres_json", e));
        }
        if let Err(e) = codec::try_decode_list::<Platform>(platforms.as_deref()) {
            issues.push(blob_issue("favorites", id, "platforms_json", e));
        }
    }

    let mut stmt = conn.prepare("SELECT id, genres_json FROM logged_entries ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?))
    })?;
    for row in rows {
        let (id, genres) = row?;
        if let Err(e) = codec::try_decode_list::<String>(genres.as_deref()) {
            issues.push(blob_issue("logged_entries", id, "genres_json", e));
        }
    }

    Ok(issues)
}

fn blob_issue(
    table: &'static str,
    row_id: i64,
    column: &'static str,
    err: codec::CodecError,
) -> BlobIssue {
    BlobIssue {
        table,
        row_id,
        column,
        message: err.to_string(),
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_favorite(row: &rusqlite::Row<'_>) -> rusqlite::Result<FavoriteRecord> {
    let genres: Option<String> = row.get(5)?;
    let platforms: Option<String> = row.get(6)?;
    Ok(FavoriteRecord {
        game_id: row.get(0)?,
        name: row.get(1)?,
        cover: row.get(2)?,
        release_date: row.get(3)?,
        summary: row.get(4)?,
        genres: codec::decode_list(genres.as_deref()),
        platforms: codec::decode_list(platforms.as_deref()),
        favorited_at: row.get(7)?,
    })
}

fn row_to_logged_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<LoggedEntry> {
    let raw_rating: i64 = row.get(3)?;
    let rating = Rating::new(raw_rating)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?;
    let genres: Option<String> = row.get(5)?;
    Ok(LoggedEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        cover: row.get(2)?,
        rating,
        feedback: row.get(4)?,
        genres: codec::decode_list(genres.as_deref()),
        game_id: row.get(6)?,
        logged_at: row.get(7)?,
    })
}
