//! Repository traits and the SQLite-backed store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use gameboxd_catalog::types::*;
use rusqlite::Connection;

use crate::operations::{self, ClearStats, StoreError};
use crate::queries::{self, BlobIssue, LibrarySnapshot, LibraryStats};
use crate::schema;

/// Storage for favorite records, keyed by catalog id.
pub trait FavoriteRepository {
    /// Persist a new favorite. Fails with [`StoreError::DuplicateKey`] if one
    /// already exists for the same game.
    fn insert_favorite(&self, record: &FavoriteRecord) -> Result<(), StoreError>;

    /// Remove the favorite for `game_id`. Absent records are not an error.
    fn delete_favorite(&self, game_id: i64) -> Result<bool, StoreError>;

    fn find_favorite(&self, game_id: i64) -> Result<Option<FavoriteRecord>, StoreError>;

    fn is_favorite(&self, game_id: i64) -> Result<bool, StoreError> {
        Ok(self.find_favorite(game_id)?.is_some())
    }

    fn list_favorites(&self) -> Result<Vec<FavoriteRecord>, StoreError>;
}

/// Storage for logged entries, keyed by a locally generated id.
pub trait LoggedEntryRepository {
    fn insert_logged_entry(&self, entry: &NewLoggedEntry) -> Result<LoggedEntry, StoreError>;

    /// Remove a logged entry. Absent records are not an error.
    fn delete_logged_entry(&self, id: i64) -> Result<bool, StoreError>;

    fn list_logged_entries(&self) -> Result<Vec<LoggedEntry>, StoreError>;

    fn logged_entries_for_game(&self, game_id: i64) -> Result<Vec<LoggedEntry>, StoreError>;
}

/// Both repositories plus operations that span them.
pub trait RecordStore: FavoriteRepository + LoggedEntryRepository {
    /// Remove every record of both kinds atomically.
    fn clear_all(&self) -> Result<ClearStats, StoreError>;

    fn stats(&self) -> Result<LibraryStats, StoreError>;

    /// Both collections at a single point in time.
    fn snapshot(&self) -> Result<LibrarySnapshot, StoreError> {
        Ok(LibrarySnapshot {
            favorites: self.list_favorites()?,
            logged_entries: self.list_logged_entries()?,
        })
    }
}

/// A [`RecordStore`] backed by a single SQLite connection.
///
/// The connection sits behind a mutex so concurrent callers see each
/// statement as one serialized step.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the library database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = schema::open_database(path)?;
        log::debug!("Opened library database at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    /// Open a fresh in-memory store. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self::from_connection(schema::open_memory()?))
    }

    /// Wrap a connection whose schema has already been created.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Report stored list columns that fail to decode.
    pub fn find_corrupt_blobs(&self) -> Result<Vec<BlobIssue>, StoreError> {
        queries::find_corrupt_blobs(&*self.lock()?)
    }

    /// Run `f` with exclusive access to the underlying connection.
    pub fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        f(&*self.lock()?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl FavoriteRepository for SqliteStore {
    fn insert_favorite(&self, record: &FavoriteRecord) -> Result<(), StoreError> {
        operations::insert_favorite(&*self.lock()?, record)
    }

    fn delete_favorite(&self, game_id: i64) -> Result<bool, StoreError> {
        operations::delete_favorite(&*self.lock()?, game_id)
    }

    fn find_favorite(&self, game_id: i64) -> Result<Option<FavoriteRecord>, StoreError> {
        queries::find_favorite(&*self.lock()?, game_id)
    }

    fn is_favorite(&self, game_id: i64) -> Result<bool, StoreError> {
        queries::is_favorite(&*self.lock()?, game_id)
    }

    fn list_favorites(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        queries::list_favorites(&*self.lock()?)
    }
}

impl LoggedEntryRepository for SqliteStore {
    fn insert_logged_entry(&self, entry: &NewLoggedEntry) -> Result<LoggedEntry, StoreError> {
        operations::insert_logged_entry(&*self.lock()?, entry)
    }

    fn delete_logged_entry(&self, id: i64) -> Result<bool, StoreError> {
        operations::delete_logged_entry(&*self.lock()?, id)
    }

    fn list_logged_entries(&self) -> Result<Vec<LoggedEntry>, StoreError> {
        queries::list_logged_entries(&*self.lock()?)
    }

    fn logged_entries_for_game(&self, game_id: i64) -> Result<Vec<LoggedEntry>, StoreError> {
        queries::logged_entries_for_game(&*self.lock()?, game_id)
    }
}

impl RecordStore for SqliteStore {
    fn clear_all(&self) -> Result<ClearStats, StoreError> {
        operations::clear_all(&*self.lock()?)
    }

    fn stats(&self) -> Result<LibraryStats, StoreError> {
        queries::library_stats(&*self.lock()?)
    }

    fn snapshot(&self) -> Result<LibrarySnapshot, StoreError> {
        queries::load_snapshot(&*self.lock()?)
    }
}
