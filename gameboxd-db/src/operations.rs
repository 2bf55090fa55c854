//! Write operations for favorites and logged entries.

use gameboxd_catalog::codec::{self, CodecError};
use gameboxd_catalog::types::*;
use rusqlite::{Connection, ErrorCode, params};
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Game {game_id} is already a favorite")]
    DuplicateKey { game_id: i64 },
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Encoding error: {0}")]
    Codec(#[from] CodecError),
    #[error("Database lock poisoned")]
    LockPoisoned,
}

// ── Favorite Operations ─────────────────────────────────────────────────────

/// Insert a favorite. Fails with `DuplicateKey` if the game is already favorited.
pub fn insert_favorite(conn: &Connection, record: &FavoriteRecord) -> Result<(), StoreError> {
    let genres = codec::encode_list(&record.genres)?;
    let platforms = codec::encode_list(&record.platforms)?;

    let result = conn.execute(
        "INSERT INTO favorites (game_id, name, cover, release_date, summary,
             genres_json, platforms_json, favorited_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.game_id,
            record.name,
            record.cover,
            record.release_date,
            record.summary,
            genres,
            platforms,
            record.favorited_at,
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(StoreError::DuplicateKey {
                game_id: record.game_id,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a favorite by catalog id. Returns whether a row was removed.
pub fn delete_favorite(conn: &Connection, game_id: i64) -> Result<bool, StoreError> {
    let changed = conn.execute("DELETE FROM favorites WHERE game_id = ?1", params![game_id])?;
    Ok(changed > 0)
}

// ── Logged Entry Operations ─────────────────────────────────────────────────

/// Insert a logged entry. Returns it with its newly assigned id.
///
/// There is no uniqueness check: the same game may be logged any number of times.
pub fn insert_logged_entry(
    conn: &Connection,
    entry: &NewLoggedEntry,
) -> Result<LoggedEntry, StoreError> {
    let genres = codec::encode_list(&entry.genres)?;

    conn.execute(
        "INSERT INTO logged_entries (game_id, name, cover, rating, feedback, genres_json, logged_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.game_id,
            entry.name,
            entry.cover,
            entry.rating.value(),
            entry.feedback,
            genres,
            entry.logged_at,
        ],
    )?;

    Ok(entry.clone().with_id(conn.last_insert_rowid()))
}

/// Delete a logged entry by its local id. Returns whether a row was removed.
pub fn delete_logged_entry(conn: &Connection, id: i64) -> Result<bool, StoreError> {
    let changed = conn.execute("DELETE FROM logged_entries WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

// ── Bulk Operations ─────────────────────────────────────────────────────────

/// Remove every favorite and logged entry in a single transaction.
///
/// Either both tables are emptied or neither is.
pub fn clear_all(conn: &Connection) -> Result<ClearStats, StoreError> {
    let tx = conn.unchecked_transaction()?;
    let favorites = tx.execute("DELETE FROM favorites", [])?;
    let logged_entries = tx.execute("DELETE FROM logged_entries", [])?;
    tx.commit()?;

    Ok(ClearStats {
        favorites,
        logged_entries,
    })
}

/// Rows removed by [`clear_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClearStats {
    pub favorites: usize,
    pub logged_entries: usize,
}
